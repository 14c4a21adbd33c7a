use crate::models::WordClass;

/// Default English stop words, one per line.
pub const DEFAULT_STOP_WORDS: &str = include_str!("../data/stopwords.txt");

/// Default multi-word platform names, one per line.
pub const DEFAULT_MULTIWORD_PLATFORM_NAMES: &str =
    include_str!("../data/multiword_platform_names.txt");

pub const NEWLINE_CHARACTERS: &[char] = &['\n', '\r', '\t'];

/// Replaced with spaces before phrase tokenization, so multi-word names still match.
pub const PRELIMINARY_PUNCTUATION: &[char] = &['_', '.', ',', ';'];

pub const SYMBOLS_REPLACED_WITH_SPACE: &[char] = &[
    '[', ']', '\'', '&', '(', ')', '\\', '/', '*', '!', '?', '$', '^', '~', '+', '=', '{', '}',
    '`', '|', '#',
];

/// Deleted outright, without leaving a space behind.
pub const SYMBOLS_REMOVED: &[char] = &['"', ':'];

/// Whitespace characters which count as printable, alongside the graphic ASCII range.
pub const PRINTABLE_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0b', '\x0c'];

pub const VERB_TAGS: &[&str] = &["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"];

pub const COMMON_NOUN_TAGS: &[&str] = &["NN", "NNS"];

pub const PENN_TAG_WORD_CLASSES: &[(&str, WordClass)] = &[
    ("NN", WordClass::Noun),
    ("NNS", WordClass::Noun),
    ("VB", WordClass::Verb),
    ("VBD", WordClass::Verb),
    ("VBG", WordClass::Verb),
    ("VBN", WordClass::Verb),
    ("VBP", WordClass::Verb),
    ("VBZ", WordClass::Verb),
    ("JJ", WordClass::Adjective),
    ("JJR", WordClass::Adjective),
    ("JJS", WordClass::Adjective),
    ("RB", WordClass::Adverb),
    ("RBR", WordClass::Adverb),
    ("RBS", WordClass::Adverb),
];

/// Contractions which lose their apostrophe during punctuation removal and would otherwise
/// survive as content words.
pub const CONTRACTION_STOP_WORDS: &[&str] = &[
    "arent", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt", "hasnt", "havent", "hed",
    "hell", "hes", "id", "ill", "im", "ive", "isnt", "its", "lets", "mightnt", "mustnt", "shant",
    "shed", "shell", "shes", "shouldnt", "thats", "theres", "theyd", "theyll", "theyre", "theyve",
    "wed", "were", "weve", "werent", "whatll", "whatre", "whats", "whatve", "wheres", "whod",
    "wholl", "whore", "whos", "whove", "wont", "wouldnt", "youd", "youll", "youre", "youve",
];

/// Upper bound on lemmatize/filter passes; passes stop early once no token changes.
pub const MAX_LEMMATIZATION_PASSES: usize = 5;

/// Irregular verb forms and their lemmas.
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("has", "have"),
    ("had", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("beat", "beat"),
    ("beaten", "beat"),
    ("became", "become"),
    ("began", "begin"),
    ("begun", "begin"),
    ("bit", "bite"),
    ("bitten", "bite"),
    ("blew", "blow"),
    ("blown", "blow"),
    ("broke", "break"),
    ("broken", "break"),
    ("brought", "bring"),
    ("built", "build"),
    ("bought", "buy"),
    ("caught", "catch"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("came", "come"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("dug", "dig"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("fed", "feed"),
    ("felt", "feel"),
    ("fled", "flee"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("fought", "fight"),
    ("found", "find"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("froze", "freeze"),
    ("frozen", "freeze"),
    ("gave", "give"),
    ("given", "give"),
    ("got", "get"),
    ("gotten", "get"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("heard", "hear"),
    ("held", "hold"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("hung", "hang"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("led", "lead"),
    ("left", "leave"),
    ("lost", "lose"),
    ("made", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("ran", "run"),
    ("rode", "ride"),
    ("ridden", "ride"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("said", "say"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("sat", "sit"),
    ("saw", "see"),
    ("seen", "see"),
    ("sent", "send"),
    ("shot", "shoot"),
    ("slew", "slay"),
    ("slain", "slay"),
    ("sought", "seek"),
    ("spent", "spend"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("stole", "steal"),
    ("stolen", "steal"),
    ("stood", "stand"),
    ("struck", "strike"),
    ("swam", "swim"),
    ("swum", "swim"),
    ("taught", "teach"),
    ("thought", "think"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("told", "tell"),
    ("took", "take"),
    ("taken", "take"),
    ("understood", "understand"),
    ("woke", "wake"),
    ("woken", "wake"),
    ("won", "win"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("wrote", "write"),
    ("written", "write"),
];

pub const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("lice", "louse"),
    ("men", "man"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

pub const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

// WordNet style detachment rules: (suffix, replacement)
pub const NOUN_DETACHMENT_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

pub const VERB_DETACHMENT_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

pub const ADJECTIVE_DETACHMENT_RULES: &[(&str, &str)] =
    &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Forms of "be", "have" and "get" which turn a following `-ed` form into a past participle.
pub const PARTICIPLE_AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "get", "gets", "got",
];

/// Tags of closed-class words, keyed by their lowercase form.
pub const CLOSED_CLASS_TAGS: &[(&str, &str)] = &[
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("each", "DT"),
    ("every", "DT"),
    ("either", "DT"),
    ("neither", "DT"),
    ("another", "DT"),
    ("all", "DT"),
    ("both", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("myself", "PRP"),
    ("yourself", "PRP"),
    ("himself", "PRP"),
    ("herself", "PRP"),
    ("itself", "PRP"),
    ("ourselves", "PRP"),
    ("themselves", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("her", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("of", "IN"),
    ("with", "IN"),
    ("by", "IN"),
    ("for", "IN"),
    ("from", "IN"),
    ("into", "IN"),
    ("onto", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("about", "IN"),
    ("through", "IN"),
    ("after", "IN"),
    ("before", "IN"),
    ("between", "IN"),
    ("during", "IN"),
    ("without", "IN"),
    ("against", "IN"),
    ("among", "IN"),
    ("around", "IN"),
    ("across", "IN"),
    ("behind", "IN"),
    ("beyond", "IN"),
    ("upon", "IN"),
    ("within", "IN"),
    ("like", "IN"),
    ("than", "IN"),
    ("as", "IN"),
    ("if", "IN"),
    ("because", "IN"),
    ("while", "IN"),
    ("since", "IN"),
    ("until", "IN"),
    ("though", "IN"),
    ("although", "IN"),
    ("whether", "IN"),
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("yet", "CC"),
    ("to", "TO"),
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("be", "VB"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("doing", "VBG"),
    ("done", "VBN"),
    ("what", "WP"),
    ("who", "WP"),
    ("whom", "WP"),
    ("whose", "WP$"),
    ("which", "WDT"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    ("there", "EX"),
    ("not", "RB"),
    ("very", "RB"),
    ("really", "RB"),
    ("also", "RB"),
    ("just", "RB"),
    ("too", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("sometimes", "RB"),
    ("still", "RB"),
    ("already", "RB"),
    ("even", "RB"),
    ("ever", "RB"),
    ("quite", "RB"),
    ("rather", "RB"),
    ("almost", "RB"),
    ("only", "RB"),
    ("then", "RB"),
    ("here", "RB"),
    ("now", "RB"),
    ("so", "RB"),
    ("well", "RB"),
    ("again", "RB"),
    ("soon", "RB"),
    ("together", "RB"),
    ("many", "JJ"),
    ("much", "JJ"),
    ("few", "JJ"),
    ("more", "JJR"),
    ("most", "JJS"),
    ("other", "JJ"),
    ("such", "JJ"),
    ("own", "JJ"),
    ("same", "JJ"),
    ("good", "JJ"),
    ("great", "JJ"),
    ("new", "JJ"),
    ("old", "JJ"),
    ("big", "JJ"),
    ("small", "JJ"),
    ("little", "JJ"),
    ("better", "JJR"),
    ("best", "JJS"),
    ("one", "CD"),
    ("two", "CD"),
    ("three", "CD"),
    ("four", "CD"),
    ("five", "CD"),
    ("six", "CD"),
    ("seven", "CD"),
    ("eight", "CD"),
    ("nine", "CD"),
    ("ten", "CD"),
    ("hundred", "CD"),
    ("thousand", "CD"),
    ("million", "CD"),
    ("yes", "UH"),
    ("oh", "UH"),
    ("wow", "UH"),
    ("hey", "UH"),
];

/// Suffixes which mark an open-class word as an adjective, when at least three characters
/// precede them.
pub const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "less", "ish"];

pub const TERM_DICTIONARY_FILE_NAME: &str = "term_dictionary.tsv";
pub const WEIGHTING_MODEL_FILE_NAME: &str = "weighting_model.tsv";
pub const PROJECTION_MODEL_FILE_NAME: &str = "projection_model.tsv";
pub const CORPUS_FILE_NAME: &str = "corpus.tsv";
pub const GZIP_FILE_EXTENSION: &str = "gz";
