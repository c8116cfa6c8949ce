use crate::catalog::Unit;
use crate::ui::card::state::CardFocus;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardIntent {
    ToggleFavorite,
    /// Raw text from the quantity field; parsed with clamp-to-floor.
    EditQuantity { raw: String },
    IncrementQuantity,
    DecrementQuantity,
    SelectUnit(Unit),
    NextUnit,
    PreviousUnit,
    FocusNext,
    FocusPrevious,
    /// Visual affordance only, no action is wired.
    AddToCart,
    /// Visual affordance only, no action is wired.
    Compare,
    /// Visual affordance only, no action is wired.
    Share,
}

impl Intent for CardIntent {}

impl CardIntent {
    /// Label of the affordance this intent activates, if it is one.
    pub fn affordance(&self) -> Option<&'static str> {
        match self {
            CardIntent::AddToCart => Some(CardFocus::AddToCart.label()),
            CardIntent::Compare => Some(CardFocus::Compare.label()),
            CardIntent::Share => Some(CardFocus::Share.label()),
            _ => None,
        }
    }
}
