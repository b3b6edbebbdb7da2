// Named regex catalog for declarative format checks

use once_cell::sync::Lazy;
use regex::Regex;

// Pattern sources for the catalog. Matching is always full-match, so every
// pattern is anchored when compiled.
// Local part loosened to `*` so single-character addresses match
const EMAIL_PATTERN: &str = r"([a-z0-9A-Z]+[-|\.]?)*[a-z0-9A-Z]@([a-z0-9A-Z]+(-[a-z0-9A-Z]+)?\.)+[a-zA-Z]{2,}";
const PHONE_NUMBER_PATTERN: &str = r"((13[0-9])|(14[0|5|6|7|9])|(15[0-3])|(15[5-9])|(16[6|7])|(17[2|3|5|6|7|8])|(18[0-9])|(19[1|8|9]))\d{8}";
const IDENTITY_CARD_PATTERN: &str = r"(\d{18})|(\d{15})";
const URL_PATTERN: &str = r"http(s)?://([\w-]+\.)+[\w-]+(/[\w ./?%&=-]*)?";
// Single dotted-quad octet, not a full address
const IP_ADDR_PATTERN: &str = r"(25[0-5]|2[0-4]\d|[0-1]\d{2}|[1-9]?\d)";
const USERNAME_PATTERN: &str = r"[a-zA-Z]\w{5,20}";
const PASSWORD_PATTERN: &str = r"[a-zA-Z0-9]{6,20}";

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).unwrap()
}

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| anchored(EMAIL_PATTERN));
static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| anchored(PHONE_NUMBER_PATTERN));
static IDENTITY_CARD_REGEX: Lazy<Regex> = Lazy::new(|| anchored(IDENTITY_CARD_PATTERN));
static URL_REGEX: Lazy<Regex> = Lazy::new(|| anchored(URL_PATTERN));
static IP_ADDR_REGEX: Lazy<Regex> = Lazy::new(|| anchored(IP_ADDR_PATTERN));
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| anchored(USERNAME_PATTERN));
static PASSWORD_REGEX: Lazy<Regex> = Lazy::new(|| anchored(PASSWORD_PATTERN));

/// Selects one precompiled catalog pattern, or no format check at all.
///
/// Each variant maps 1:1 to exactly one pattern; the catalog is immutable
/// and shared process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegexChoice {
    /// No format check
    #[default]
    None,
    Email,
    PhoneNumber,
    IdentityCard,
    Url,
    IpAddr,
    Username,
    Password,
}

impl RegexChoice {
    /// The precompiled pattern for this choice, or `None` for no check
    pub fn regex(&self) -> Option<&'static Regex> {
        match self {
            RegexChoice::None => Option::None,
            RegexChoice::Email => Some(&EMAIL_REGEX),
            RegexChoice::PhoneNumber => Some(&PHONE_NUMBER_REGEX),
            RegexChoice::IdentityCard => Some(&IDENTITY_CARD_REGEX),
            RegexChoice::Url => Some(&URL_REGEX),
            RegexChoice::IpAddr => Some(&IP_ADDR_REGEX),
            RegexChoice::Username => Some(&USERNAME_REGEX),
            RegexChoice::Password => Some(&PASSWORD_REGEX),
        }
    }

    /// Full-match the catalog pattern against `text`.
    ///
    /// The no-check variant matches everything.
    pub fn is_match(&self, text: &str) -> bool {
        match self.regex() {
            Some(regex) => regex.is_match(text),
            Option::None => true,
        }
    }
}
