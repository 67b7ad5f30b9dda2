// =============================================================================
// SHARE LINK QUERY KEYS
// =============================================================================

/// Seed driving the pseudo-random stream
pub const PARAM_SEED: &str = "s";

/// Requested number of dishes
pub const PARAM_AMOUNT: &str = "a";

/// Kid-friendly dishes only
pub const PARAM_KIDS_ONLY: &str = "k";

/// Vegetarian (or vegan) dishes only
pub const PARAM_VEG_ONLY: &str = "v";

/// Encoded value of a set flag. Anything else decodes as false.
pub const FLAG_ON: &str = "1";

/// Encoded value of a cleared flag
pub const FLAG_OFF: &str = "0";

/// Number of hex characters in a generated seed
pub const SEED_LEN: usize = 8;

// =============================================================================
// DATASET VOCABULARY
// =============================================================================

/// Tag marking a dish as kid-friendly
pub const DEFAULT_KID_FRIENDLY_TAG: &str = "c";

/// Diet classifiers accepted by the vegetarian filter (vegetarian, vegan)
pub const DEFAULT_VEGETARIAN_DIETS: &[&str] = &["k", "ve"];

/// Separator between list elements inside a dataset column
pub const LIST_SEPARATOR: char = ',';

/// Separator between dataset columns
pub const FIELD_SEPARATOR: char = '\t';

/// Columns a row needs: id, name, tags, diet, ingredients. Shorter rows are skipped.
pub const FIELD_COUNT: usize = 5;
