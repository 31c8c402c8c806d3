// Shared enums: Category, VerbForm
//
// Tokens arrive with a Penn Treebank tag string. The tag is classified once,
// when the token is built, and everything downstream matches on these enums
// instead of re-inspecting tag prefixes.

/// Inflectional form of a verb, one per Penn Treebank verb tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbForm {
    /// `VB`: base form.
    Base,
    /// `VBD`: past tense.
    Past,
    /// `VBG`: gerund or present participle.
    Gerund,
    /// `VBN`: past participle.
    PastParticiple,
    /// `VBP`: non-3rd person singular present.
    NonThirdPresent,
    /// `VBZ`: 3rd person singular present.
    ThirdPresent,
}

impl VerbForm {
    /// Parse a verb tag. Returns `None` for anything outside the six verb tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "VB" => Some(Self::Base),
            "VBD" => Some(Self::Past),
            "VBG" => Some(Self::Gerund),
            "VBN" => Some(Self::PastParticiple),
            "VBP" => Some(Self::NonThirdPresent),
            "VBZ" => Some(Self::ThirdPresent),
            _ => None,
        }
    }

    /// The Penn Treebank tag for this form.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Base => "VB",
            Self::Past => "VBD",
            Self::Gerund => "VBG",
            Self::PastParticiple => "VBN",
            Self::NonThirdPresent => "VBP",
            Self::ThirdPresent => "VBZ",
        }
    }

    /// Past tense or past participle.
    pub fn is_past(self) -> bool {
        matches!(self, Self::Past | Self::PastParticiple)
    }
}

/// Grammatical category of a token, as far as verb-chain analysis cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A main or auxiliary verb (`VB*`).
    Verb(VerbForm),
    /// A modal (`MD`).
    Modal,
    /// Any adverb or particle tag starting with `R` (`RB`, `RBR`, `RBS`, `RP`).
    Adverb,
    /// The infinitive marker `TO`.
    InfinitiveMarker,
    /// Everything else (nouns, punctuation, ...).
    Other,
}

impl Category {
    /// Classify a Penn Treebank tag.
    pub fn from_tag(tag: &str) -> Self {
        if let Some(form) = VerbForm::from_tag(tag) {
            return Self::Verb(form);
        }
        match tag {
            "MD" => Self::Modal,
            "TO" => Self::InfinitiveMarker,
            t if t.starts_with('R') => Self::Adverb,
            _ => Self::Other,
        }
    }

    /// Verbs and modals both count as verbs when chains are built.
    pub fn is_verb(self) -> bool {
        matches!(self, Self::Verb(_) | Self::Modal)
    }

    pub fn is_modal(self) -> bool {
        self == Self::Modal
    }

    pub fn is_adverb(self) -> bool {
        self == Self::Adverb
    }

    /// The verb form, if this is a (non-modal) verb.
    pub fn verb_form(self) -> Option<VerbForm> {
        match self {
            Self::Verb(form) => Some(form),
            _ => None,
        }
    }
}
