//! Shareable custom puzzle links
//!
//! A custom puzzle travels in the URL fragment as form-encoded parameters:
//!
//! | key  | value                                   |
//! |------|-----------------------------------------|
//! | `d`  | difficulty                              |
//! | `s`  | solution, URL-safe base64 of UTF-8 text |
//! | `c`  | creator, URL-safe base64 of UTF-8 text  |
//! | `id` | player id                               |
//!
//! The solution is obfuscated rather than hidden; anyone can decode it.

use super::{Difficulty, Puzzle, PuzzleSelector};
use crate::core::{Word, WordError};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use url::{Url, form_urlencoded};

/// Creator shown when a link does not name one
pub const DEFAULT_CREATOR: &str = "ismeretlen szerző";

const KEY_DIFFICULTY: &str = "d";
const KEY_SOLUTION: &str = "s";
const KEY_CREATOR: &str = "c";
const KEY_ID: &str = "id";

/// Error type for link handling
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Invalid origin URL: {0}")]
    Origin(#[from] url::ParseError),
    #[error("Invalid puzzle word: {0}")]
    Word(#[from] WordError),
    #[error("Malformed link parameter: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("Link parameter is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Raw custom puzzle carried by a link, before length validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPuzzle {
    pub solution: String,
    pub creator: String,
}

impl CustomPuzzle {
    #[must_use]
    pub fn new(solution: impl Into<String>, creator: Option<String>) -> Self {
        Self {
            solution: solution.into(),
            creator: creator.unwrap_or_else(|| DEFAULT_CREATOR.to_string()),
        }
    }
}

/// Parameters found in a link fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkParams {
    pub difficulty: Option<Difficulty>,
    pub solution: Option<String>,
    pub creator: Option<String>,
    pub id: Option<String>,
}

impl LinkParams {
    /// Parse a full URL or a bare fragment
    ///
    /// Unknown keys and an out-of-range difficulty are ignored.
    ///
    /// # Errors
    ///
    /// Returns `LinkError` if the solution or creator is not valid base64 text.
    ///
    /// # Examples
    /// ```
    /// use szozat::puzzle::LinkParams;
    ///
    /// let params = LinkParams::parse("https://szozat.idavid.hu/#d=5&s=S0FMQVA").unwrap();
    /// assert_eq!(params.solution.as_deref(), Some("KALAP"));
    /// assert_eq!(params.difficulty.map(|d| d.value()), Some(5));
    /// ```
    pub fn parse(input: &str) -> Result<Self, LinkError> {
        let fragment = input.split_once('#').map_or(input, |(_, fragment)| fragment);

        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
            match key.as_ref() {
                KEY_DIFFICULTY => params.difficulty = value.parse().ok(),
                KEY_SOLUTION => params.solution = Some(decode_param(&value)?),
                KEY_CREATOR => params.creator = Some(decode_param(&value)?),
                KEY_ID => params.id = Some(value.into_owned()),
                _ => {}
            }
        }
        Ok(params)
    }

    /// Encode back into a fragment (without the leading `#`)
    #[must_use]
    pub fn to_fragment(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(difficulty) = self.difficulty {
            serializer.append_pair(KEY_DIFFICULTY, &difficulty.to_string());
        }
        if let Some(solution) = &self.solution {
            serializer.append_pair(KEY_SOLUTION, &encode_param(solution));
        }
        if let Some(creator) = &self.creator {
            serializer.append_pair(KEY_CREATOR, &encode_param(creator));
        }
        if let Some(id) = &self.id {
            serializer.append_pair(KEY_ID, id);
        }
        serializer.finish()
    }

    /// The custom puzzle, if the link carries a solution
    #[must_use]
    pub fn custom(&self) -> Option<CustomPuzzle> {
        self.solution
            .as_ref()
            .map(|solution| CustomPuzzle::new(solution.clone(), self.creator.clone()))
    }

    /// The custom puzzle, if it fits `difficulty`
    #[must_use]
    pub fn custom_puzzle(&self, difficulty: Difficulty) -> Option<Puzzle> {
        self.custom()
            .and_then(|custom| PuzzleSelector::custom_word(&custom, difficulty))
    }
}

/// Encode a link parameter as URL-safe base64
#[must_use]
pub fn encode_param(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Decode a URL-safe base64 link parameter, with or without padding
///
/// # Errors
///
/// Returns `LinkError` for invalid base64 or non UTF-8 content.
pub fn decode_param(value: &str) -> Result<String, LinkError> {
    let bytes = URL_SAFE_NO_PAD.decode(value.trim().trim_end_matches('='))?;
    Ok(String::from_utf8(bytes)?)
}

/// Build a link that starts a custom puzzle
///
/// The word must have exactly as many letter units as the difficulty asks
/// for. A blank creator is left out so the default applies.
///
/// # Errors
///
/// Returns `LinkError` for an invalid origin or a word of the wrong length.
///
/// # Examples
/// ```
/// use szozat::puzzle::{Difficulty, create_puzzle_link};
///
/// let link = create_puzzle_link("https://szozat.idavid.hu", "kalap", None, Difficulty::default()).unwrap();
/// assert_eq!(link, "https://szozat.idavid.hu/#d=5&s=S0FMQVA");
/// ```
pub fn create_puzzle_link(
    origin: &str,
    word: &str,
    creator: Option<&str>,
    difficulty: Difficulty,
) -> Result<String, LinkError> {
    let word = Word::parse(word, difficulty.word_length())?;
    let params = LinkParams {
        difficulty: Some(difficulty),
        solution: Some(word.text()),
        creator: creator
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
        id: None,
    };

    let mut url = Url::parse(origin)?;
    url.set_fragment(Some(&params.to_fragment()));
    Ok(url.into())
}
