use crate::constants::{
    CORPUS_FILE_NAME, GZIP_FILE_EXTENSION, PROJECTION_MODEL_FILE_NAME,
    TERM_DICTIONARY_FILE_NAME, WEIGHTING_MODEL_FILE_NAME,
};
use crate::utils::{
    read_artifact_file, read_corpus_from_string, read_projection_model_from_string,
    read_term_dictionary_from_string, read_weighting_model_from_string,
};
use crate::{
    Corpus, Error, GameSage, LsaProjection, NormalizerResources, ProjectionModel, TermDictionary,
    TfIdfModel,
};
use log::info;
use std::path::{Path, PathBuf};

/// The pretrained model triple and the corpus it was trained on.
#[derive(Debug, Clone)]
pub struct SemanticArtifacts {
    pub term_dictionary: TermDictionary,
    pub weighting_model: TfIdfModel,
    pub projection_model: LsaProjection,
    pub corpus: Corpus,
}

impl SemanticArtifacts {
    pub fn from_tsv_strings(
        term_dictionary_tsv: &str,
        weighting_model_tsv: &str,
        projection_model_tsv: &str,
        corpus_tsv: &str,
    ) -> Result<Self, Error> {
        let term_dictionary = read_term_dictionary_from_string(term_dictionary_tsv)?;
        let weighting_model = read_weighting_model_from_string(weighting_model_tsv)?;
        let projection_model = read_projection_model_from_string(projection_model_tsv)?;
        let corpus = read_corpus_from_string(corpus_tsv)?;

        info!(
            "Loaded {} terms, {} semantic dimensions and {} corpus documents",
            term_dictionary.term_count(),
            projection_model.dimension(),
            corpus.len()
        );

        Ok(SemanticArtifacts {
            term_dictionary,
            weighting_model,
            projection_model,
            corpus,
        })
    }

    /// Loads every artifact from `dir`, accepting gzip compressed (`.gz`) files as well.
    pub fn load_from_dir(dir: &Path) -> Result<Self, Error> {
        info!("Loading semantic artifacts from {}", dir.display());

        Self::from_tsv_strings(
            &read_artifact_file(&locate_artifact(dir, TERM_DICTIONARY_FILE_NAME)?)?,
            &read_artifact_file(&locate_artifact(dir, WEIGHTING_MODEL_FILE_NAME)?)?,
            &read_artifact_file(&locate_artifact(dir, PROJECTION_MODEL_FILE_NAME)?)?,
            &read_artifact_file(&locate_artifact(dir, CORPUS_FILE_NAME)?)?,
        )
    }

    pub fn game_sage<'a>(
        &'a self,
        resources: &'a NormalizerResources,
    ) -> Result<GameSage<'a>, Error> {
        GameSage::new(
            &self.term_dictionary,
            &self.weighting_model,
            &self.projection_model,
            &self.corpus,
            resources,
        )
    }
}

fn locate_artifact(dir: &Path, file_name: &str) -> Result<PathBuf, Error> {
    let path = dir.join(file_name);
    if path.is_file() {
        return Ok(path);
    }

    let compressed_path = dir.join(format!("{}.{}", file_name, GZIP_FILE_EXTENSION));
    if compressed_path.is_file() {
        return Ok(compressed_path);
    }

    Err(Error::ArtifactError(format!(
        "Missing artifact {} in {}",
        file_name,
        dir.display()
    )))
}
