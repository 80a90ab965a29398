//! Searchable fields and their comparison types.
//!
//! Every searchable column is addressed by a single letter in the query
//! language (`o:3` filters on cost). Bare words with no letter prefix
//! search the card name. Each field compares as one of four kinds:
//! string (substring), integer, boolean, or code (joined-entity code).

use serde::{Deserialize, Serialize};

/// How values of a field are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Case-insensitive substring match.
    String,
    /// Numeric comparison; supports range operators.
    Integer,
    /// `1` / `0` flag.
    Boolean,
    /// Equality on a joined entity's code (or name).
    Code,
}

/// A searchable field of the card database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchField {
    /// Bare query words: card name, or an exact card code.
    Name,
    /// `a` - flavor text.
    Flavor,
    /// `b` - plot claim.
    Claim,
    /// `c` - cycle position.
    Cycle,
    /// `d` - designer credit.
    Designer,
    /// `e` - pack code or name.
    Pack,
    /// `f` - faction code or name.
    Faction,
    /// `g` - intrigue icon.
    Intrigue,
    /// `h` - plot reserve.
    Reserve,
    /// `i` - illustrator credit.
    Illustrator,
    /// `k` - trait list.
    Traits,
    /// `l` - loyal flag.
    Loyal,
    /// `m` - military icon.
    Military,
    /// `n` - plot income.
    Income,
    /// `o` - gold cost.
    Cost,
    /// `p` - power icon.
    Power,
    /// `r` - pack release date.
    DateRelease,
    /// `s` - character strength.
    Strength,
    /// `t` - card type code.
    Type,
    /// `u` - unique flag.
    Unique,
    /// `v` - plot initiative.
    Initiative,
    /// `x` - rules text.
    Text,
    /// `y` - per-pack quantity.
    Quantity,
}

/// Every field addressable by letter, in letter order.
///
/// `Name` is excluded: bare words carry no letter prefix.
pub const LETTER_FIELDS: [SearchField; 22] = [
    SearchField::Flavor,
    SearchField::Claim,
    SearchField::Cycle,
    SearchField::Designer,
    SearchField::Pack,
    SearchField::Faction,
    SearchField::Intrigue,
    SearchField::Reserve,
    SearchField::Illustrator,
    SearchField::Traits,
    SearchField::Loyal,
    SearchField::Military,
    SearchField::Income,
    SearchField::Cost,
    SearchField::Power,
    SearchField::DateRelease,
    SearchField::Strength,
    SearchField::Type,
    SearchField::Unique,
    SearchField::Initiative,
    SearchField::Text,
    SearchField::Quantity,
];

impl SearchField {
    /// Resolve a query-language letter to its field.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'a' => SearchField::Flavor,
            'b' => SearchField::Claim,
            'c' => SearchField::Cycle,
            'd' => SearchField::Designer,
            'e' => SearchField::Pack,
            'f' => SearchField::Faction,
            'g' => SearchField::Intrigue,
            'h' => SearchField::Reserve,
            'i' => SearchField::Illustrator,
            'k' => SearchField::Traits,
            'l' => SearchField::Loyal,
            'm' => SearchField::Military,
            'n' => SearchField::Income,
            'o' => SearchField::Cost,
            'p' => SearchField::Power,
            'r' => SearchField::DateRelease,
            's' => SearchField::Strength,
            't' => SearchField::Type,
            'u' => SearchField::Unique,
            'v' => SearchField::Initiative,
            'x' => SearchField::Text,
            'y' => SearchField::Quantity,
            _ => return None,
        })
    }

    /// The query-language letter for this field. `None` for `Name`.
    #[must_use]
    pub fn letter(self) -> Option<char> {
        Some(match self {
            SearchField::Name => return None,
            SearchField::Flavor => 'a',
            SearchField::Claim => 'b',
            SearchField::Cycle => 'c',
            SearchField::Designer => 'd',
            SearchField::Pack => 'e',
            SearchField::Faction => 'f',
            SearchField::Intrigue => 'g',
            SearchField::Reserve => 'h',
            SearchField::Illustrator => 'i',
            SearchField::Traits => 'k',
            SearchField::Loyal => 'l',
            SearchField::Military => 'm',
            SearchField::Income => 'n',
            SearchField::Cost => 'o',
            SearchField::Power => 'p',
            SearchField::DateRelease => 'r',
            SearchField::Strength => 's',
            SearchField::Type => 't',
            SearchField::Unique => 'u',
            SearchField::Initiative => 'v',
            SearchField::Text => 'x',
            SearchField::Quantity => 'y',
        })
    }

    /// The column this field searches, for display purposes.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Flavor => "flavor",
            SearchField::Claim => "claim",
            SearchField::Cycle => "cycle",
            SearchField::Designer => "designer",
            SearchField::Pack => "pack",
            SearchField::Faction => "faction",
            SearchField::Intrigue => "is_intrigue",
            SearchField::Reserve => "reserve",
            SearchField::Illustrator => "illustrator",
            SearchField::Traits => "traits",
            SearchField::Loyal => "is_loyal",
            SearchField::Military => "is_military",
            SearchField::Income => "income",
            SearchField::Cost => "cost",
            SearchField::Power => "is_power",
            SearchField::DateRelease => "date_release",
            SearchField::Strength => "strength",
            SearchField::Type => "type",
            SearchField::Unique => "is_unique",
            SearchField::Initiative => "initiative",
            SearchField::Text => "text",
            SearchField::Quantity => "quantity",
        }
    }

    /// How this field's values are compared.
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            SearchField::Name
            | SearchField::Flavor
            | SearchField::Designer
            | SearchField::Illustrator
            | SearchField::Traits
            | SearchField::DateRelease
            | SearchField::Text => FieldKind::String,
            SearchField::Claim
            | SearchField::Cycle
            | SearchField::Reserve
            | SearchField::Income
            | SearchField::Cost
            | SearchField::Strength
            | SearchField::Initiative
            | SearchField::Quantity => FieldKind::Integer,
            SearchField::Intrigue
            | SearchField::Loyal
            | SearchField::Military
            | SearchField::Power
            | SearchField::Unique => FieldKind::Boolean,
            SearchField::Pack | SearchField::Faction | SearchField::Type => FieldKind::Code,
        }
    }
}
