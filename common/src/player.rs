use serde::{Deserialize, Serialize};

/// Represents one player at the table: identity plus current game state.
///
/// `C` is the card type held in the player's hand. The hand is opaque to
/// this crate; nothing here inspects the cards or computes anything from
/// them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player<C> {
    /// Display name. `None` until the player identifies themselves.
    pub username: Option<String>,
    pub points: i64,
    /// The hand, in deal order. `None` until cards are dealt.
    pub cards: Option<Vec<C>>,
    /// Running total for the hand. Maintained by whoever mutates `cards`;
    /// the record itself never recomputes it.
    pub value_of_cards: i64,
    /// Free-text status, e.g. "Connected", "Joined", "Folded".
    pub last_action: String,
}

impl<C> Player<C> {
    /// Create a record for a named player with an explicit status.
    /// Any strings are accepted, empty ones included.
    pub fn new(username: &str, last_action: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            last_action: last_action.to_string(),
            ..Self::default()
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String
    where
        C: Serialize,
    {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, String>
    where
        C: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

impl<C> Default for Player<C> {
    fn default() -> Self {
        Self {
            username: None,
            points: 0,
            cards: None,
            value_of_cards: 0,
            last_action: "Connected".to_string(),
        }
    }
}
