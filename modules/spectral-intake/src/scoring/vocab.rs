//! Vocabulary banks the dimension scorers count against.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::term_regex;

pub(crate) static EVIDENCE_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "photo", "photos", "photograph", "picture", "video", "footage", "recording", "recorded",
        "camera", "trail cam", "footprint", "footprints", "tracks", "plaster cast", "hair sample",
        "sample", "measured", "radar", "thermal", "evp", "emf", "police report", "filed a report",
        "burn marks", "scorch", "imprint",
    ])
});

pub(crate) static RELATION_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "my wife", "my husband", "my brother", "my sister", "my friend", "my father", "my mother",
        "my dad", "my mom", "my son", "my daughter", "my partner", "my girlfriend",
        "my boyfriend", "my neighbor", "my neighbour", "my coworker", "my cousin", "my uncle",
        "my aunt", "my grandmother", "my grandfather",
    ])
});

pub(crate) static PROFESSION_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "pilot", "police officer", "deputy", "sheriff", "state trooper", "nurse", "doctor",
        "engineer", "military", "veteran", "air force", "navy", "army", "marine", "scientist",
        "astronomer", "meteorologist", "firefighter", "paramedic", "air traffic controller",
        "park ranger", "security guard", "teacher",
    ])
});

pub(crate) static SELF_IDENTIFICATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:i\s+am\s+an?|i'm\s+an?|i\s+work\s+as\s+an?|i\s+worked\s+as\s+an?|as\s+a\s+retired)\s+\w+").unwrap()
});

pub(crate) static FIRST_HAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:i|we)\s+(?:saw|heard|witnessed|watched|noticed|felt|smelled)\b").unwrap()
});

pub(crate) static SIGHT_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "saw", "seen", "bright", "glow", "glowing", "light", "lights", "shadow", "figure",
        "silhouette", "flash", "flashing", "color", "colored", "orb", "mist", "apparition",
        "shape", "pulsing",
    ])
});

pub(crate) static SOUND_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "heard", "sound", "noise", "humming", "hum", "buzzing", "whisper", "whispering",
        "footsteps", "knocking", "scream", "screaming", "growl", "howl", "voice", "voices",
        "silent", "crackling", "whoop",
    ])
});

pub(crate) static SMELL_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&["smell", "smelled", "odor", "stench", "sulfur", "perfume", "musky", "rotten"])
});

pub(crate) static TOUCH_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "cold", "chill", "warm", "heat", "touched", "vibration", "vibrating", "static",
        "pressure", "tingling", "pushed", "grabbed",
    ])
});

pub(crate) static BEHAVIOR_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "hovered", "hovering", "moved", "moving", "darted", "zigzag", "zig zag", "accelerated",
        "descended", "ascended", "floated", "floating", "vanished", "disappeared", "appeared",
        "walked", "ran", "crouched", "stood", "turned", "followed", "circled", "blinked",
        "changed direction",
    ])
});

pub(crate) static MEASUREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+(?:\.\d+)?\s*(?:feet|foot|ft|meters?|metres?|m|miles?|yards?|inches|inch|km|kilometers?|seconds?|secs?|minutes?|mins?|hours?|hrs?|degrees?|mph|knots)\b").unwrap()
});

pub(crate) static ROAD_LANDMARK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:highway|hwy|route|interstate|i-\d+|us-\d+|county\s+road|road|rd|street|avenue|ave|lane|mile\s+marker|exit\s+\d+|bridge|lake|river|creek|park|cemetery|church|school|hospital|farm|ranch|forest|mountain|trail|campground|reservoir)\b").unwrap()
});

pub(crate) static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

pub(crate) static CLOCK_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:\d{1,2}(?::\d{2})?\s*(?:am|pm|a\.m\.|p\.m\.)|\d{1,2}:\d{2}|midnight|noon|dusk|dawn|sunset|sunrise|twilight)").unwrap()
});

pub(crate) static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:for|lasted|lasting|about|around|approximately|roughly)\s+(?:\d+|a\s+few|several|a\s+couple\s+of|one|two|three|five|ten|fifteen|twenty|thirty)\s+(?:seconds?|minutes?|hours?)\b").unwrap()
});

pub(crate) static SEQUENCE_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "then", "after that", "afterwards", "suddenly", "later", "before", "finally", "next",
        "at first", "eventually", "meanwhile", "immediately",
    ])
});

pub(crate) static OTHER_WITNESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:other\s+witnesses|others\s+(?:saw|reported|heard)|(?:neighbors?|neighbours?|friends?|family)\s+(?:also|too)\b|also\s+saw|we\s+all\s+saw|both\s+saw|several\s+people|multiple\s+witnesses)").unwrap()
});

pub(crate) static EXTERNAL_RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:news|newspaper|local\s+paper|reported\s+it|report\s+number|case\s+number|case\s+#|police\s+report|called\s+the\s+police|called\s+911|nuforc|mufon|bfro|faa|air\s+traffic|sheriff's\s+office)\b").unwrap()
});

pub(crate) static CONNECTIVE_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "because", "so", "then", "after", "when", "while", "although", "however", "which",
        "as soon as", "until", "since", "before", "but",
    ])
});

pub(crate) static FIRST_PERSON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:i|me|my|we|us|our)\b").unwrap());

pub(crate) static THIRD_PERSON_NARRATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:he|she|they)\s+(?:saw|heard|felt|said)\b").unwrap());

pub(crate) static BOILERPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "this really happened", "you won't believe", "you wont believe", "true story",
        "i know this sounds crazy", "not sure where to post this", "copy and paste",
        "lorem ipsum", "click here", "in this article", "submitted by", "originally posted",
        "read more", "sorry for formatting", "sorry for bad english", "throwaway account",
        "long time lurker", "first time poster",
    ])
});

pub(crate) static EMOTION_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    term_regex(&[
        "terrified", "scared", "afraid", "frightened", "shaking", "shaken", "chills",
        "goosebumps", "frozen", "froze", "heart racing", "heart was pounding", "panic",
        "panicked", "nervous", "uneasy", "dread", "couldn't sleep", "could not sleep", "in awe",
        "speechless", "cried",
    ])
});
