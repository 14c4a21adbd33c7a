use gamesage::{ProjectionModel, VectorFolder};
use test_utils::constants::TEST_CORPUS_IDS;
use test_utils::{load_test_artifacts, ranked_ids};

#[cfg(test)]
mod vector_folder_tests {
    use super::*;

    #[test]
    fn test_dimension_zero_is_dropped() {
        let artifacts = load_test_artifacts();
        let folder = VectorFolder::new(
            &artifacts.term_dictionary,
            &artifacts.weighting_model,
            &artifacts.projection_model,
        );

        let query_vector = folder.fold("puzzle");

        assert_eq!(artifacts.projection_model.dimension(), 4);
        assert_eq!(query_vector.as_slice(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_folded_and_corpus_dimensions_agree() {
        let artifacts = load_test_artifacts();
        let folder = VectorFolder::new(
            &artifacts.term_dictionary,
            &artifacts.weighting_model,
            &artifacts.projection_model,
        );

        assert_eq!(artifacts.corpus.dimension(), 3);
        assert_eq!(folder.fold("dragon sword").dimension(), 3);

        for document in artifacts.corpus.documents() {
            assert_eq!(document.vector.dimension(), 3);
        }
    }

    #[test]
    fn test_counts_are_weighted_and_normalized() {
        let artifacts = load_test_artifacts();
        let folder = VectorFolder::new(
            &artifacts.term_dictionary,
            &artifacts.weighting_model,
            &artifacts.projection_model,
        );

        assert_eq!(
            folder.count_terms("dragon dragon sword banana"),
            vec![(2, 2.0), (3, 1.0)]
        );
        assert_eq!(folder.fold("dragon dragon").as_slice(), &[0.9, 0.0, 0.1]);
    }

    #[test]
    fn test_out_of_vocabulary_query_ranks_everything_at_zero() {
        let artifacts = load_test_artifacts();
        let folder = VectorFolder::new(
            &artifacts.term_dictionary,
            &artifacts.weighting_model,
            &artifacts.projection_model,
        );

        let query_vector = folder.fold("banana smoothie");
        assert!(query_vector.is_zero());
        assert_eq!(query_vector.dimension(), 3);

        let results = gamesage::SimilarityRanker::new(
            &artifacts.corpus,
            gamesage::DEFAULT_SIMILARITY_RANKER_CONFIG,
        )
        .rank(&query_vector)
        .expect("Failed to rank corpus");

        assert!(results.most_related.iter().all(|entry| entry.score == 0.0));
        assert_eq!(ranked_ids(&results.most_related), TEST_CORPUS_IDS);
        assert_eq!(ranked_ids(&results.least_related), TEST_CORPUS_IDS);
    }
}
