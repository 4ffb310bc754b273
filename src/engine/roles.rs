use std::{collections::BTreeSet, fmt};

use dyn_clone::DynClone;
use once_cell::sync::Lazy;
use regex::Regex;

/// What a card does for a deck's game plan.
///
/// Variants are declared alphabetically by [`Role::name`] so that a
/// [`RoleSet`] iterates as the sorted list of role names.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Role {
    Anthem,
    BoardWipe,
    Disruption,
    Draw,
    Land,
    Protection,
    Ramp,
    Removal,
    Synergy,
    Threat,
    Tutor,
}

impl Role {
    pub const ALL: [Role; 11] = [
        Role::Anthem,
        Role::BoardWipe,
        Role::Disruption,
        Role::Draw,
        Role::Land,
        Role::Protection,
        Role::Ramp,
        Role::Removal,
        Role::Synergy,
        Role::Threat,
        Role::Tutor,
    ];

    pub fn name(self) -> &'static str {
        use Role::*;
        match self {
            Anthem => "anthem",
            BoardWipe => "board_wipe",
            Disruption => "disruption",
            Draw => "draw",
            Land => "land",
            Protection => "protection",
            Ramp => "ramp",
            Removal => "removal",
            Synergy => "synergy",
            Threat => "threat",
            Tutor => "tutor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

pub type RoleSet = BTreeSet<Role>;

/// Lower-cased view of the two card fields the rules look at.
pub struct CardText {
    pub type_line: String,
    pub rules_text: String,
}

impl CardText {
    pub fn new(type_line: &str, rules_text: Option<&str>) -> Self {
        Self {
            type_line: type_line.to_lowercase(),
            rules_text: rules_text.unwrap_or_default().to_lowercase(),
        }
    }
}

/// One predicate -> roles mapping. Rules are independent of each other; the
/// classifier unions whatever every rule reports.
pub trait RoleRule: DynClone + Send + Sync {
    fn roles(&self, text: &CardText) -> Vec<Role>;
}

dyn_clone::clone_trait_object!(RoleRule);

#[derive(Clone, Debug)]
pub enum TextMatch {
    Pattern(Regex),
    AllOf(Vec<TextMatch>),
    AnyOf(Vec<TextMatch>),
}

impl TextMatch {
    pub fn pattern(src: &str) -> Self {
        TextMatch::Pattern(Regex::new(src).expect("role pattern is valid"))
    }

    pub fn any_of<'a>(srcs: impl IntoIterator<Item = &'a str>) -> Self {
        TextMatch::AnyOf(srcs.into_iter().map(Self::pattern).collect())
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            TextMatch::Pattern(re) => re.is_match(text),
            TextMatch::AllOf(all) => all.iter().all(|m| m.is_match(text)),
            TextMatch::AnyOf(any) => any.iter().any(|m| m.is_match(text)),
        }
    }
}

/// Fires when the rules text matches.
#[derive(Clone)]
pub struct TextRule {
    matcher: TextMatch,
    grants: Vec<Role>,
}

impl TextRule {
    pub fn new(matcher: TextMatch, grants: Vec<Role>) -> Box<Self> {
        Box::new(Self { matcher, grants })
    }
}

impl RoleRule for TextRule {
    fn roles(&self, text: &CardText) -> Vec<Role> {
        if self.matcher.is_match(&text.rules_text) {
            self.grants.clone()
        } else {
            vec![]
        }
    }
}

/// Fires when the type line contains a word.
#[derive(Clone)]
pub struct TypeRule {
    word: &'static str,
    grants: Role,
}

impl TypeRule {
    pub fn new(word: &'static str, grants: Role) -> Box<Self> {
        Box::new(Self { word, grants })
    }
}

impl RoleRule for TypeRule {
    fn roles(&self, text: &CardText) -> Vec<Role> {
        if text.type_line.contains(self.word) {
            vec![self.grants]
        } else {
            vec![]
        }
    }
}

static STANDARD: Lazy<RoleClassifier> = Lazy::new(|| {
    use Role::*;
    use TextMatch::*;

    let ramp = AnyOf(vec![
        AllOf(vec![
            TextMatch::pattern(r"\badds?\b"),
            TextMatch::any_of([r"\{[^}]+\}", r"\bmana\b"]),
        ]),
        TextMatch::pattern(r"search your library for (a|up to \w+) basic land cards?"),
    ]);
    let tutor = AllOf(vec![
        TextMatch::pattern(r"search your library for a card"),
        TextMatch::pattern(r"put it into your hand"),
    ]);

    RoleClassifier::new(vec![
        TextRule::new(ramp, vec![Ramp]),
        TextRule::new(TextMatch::pattern(r"\bdraws?\b.*\bcards?\b"), vec![Draw]),
        TextRule::new(tutor, vec![Tutor]),
        TextRule::new(
            TextMatch::any_of([r"\bdestroy all creatures\b", r"\bexile all creatures\b"]),
            vec![BoardWipe, Removal],
        ),
        TextRule::new(
            TextMatch::any_of([
                r"\bdestroys?\b.*\btarget\b",
                r"\bexiles?\b.*\btarget\b",
                r"\bdeals?\b.*\bdamage\b.*\bto any target\b",
                r"\bdeals?\b.*\bdamage\b.*\btarget creature\b",
                r"\bfights?\b.*\banother target creature\b",
            ]),
            vec![Removal],
        ),
        TextRule::new(
            TextMatch::any_of([r"\bcounters?\b.*\btarget\b.*\bspell\b", r"target player.*discards"]),
            vec![Disruption],
        ),
        TextRule::new(
            TextMatch::any_of([r"\bgains? hexproof\b", r"\bgains? indestructible\b"]),
            vec![Protection],
        ),
        TextRule::new(TextMatch::pattern(r"creatures you control get \+\d+/\+\d+"), vec![Anthem]),
        TypeRule::new("creature", Threat),
        TypeRule::new("land", Land),
    ])
});

/// Maps a card's type line and rules text to its [`RoleSet`].
#[derive(Clone)]
pub struct RoleClassifier {
    rules: Vec<Box<dyn RoleRule>>,
}

impl RoleClassifier {
    pub fn new(rules: Vec<Box<dyn RoleRule>>) -> Self {
        Self { rules }
    }

    /// The built-in rule list. Patterns are compiled once per process.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    pub fn with_rule(mut self, rule: Box<dyn RoleRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Never empty: a card no rule recognizes is tagged `synergy`.
    pub fn classify(&self, type_line: &str, rules_text: Option<&str>) -> RoleSet {
        let text = CardText::new(type_line, rules_text);
        let mut roles: RoleSet = self.rules
            .iter()
            .flat_map(|rule| rule.roles(&text))
            .collect();
        if roles.is_empty() {
            roles.insert(Role::Synergy);
        }
        roles
    }
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::standard()
    }
}
