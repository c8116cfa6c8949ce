use crate::catalog::{ProductDisplay, Unit, MIN_QUANTITY};
use crate::ui::mvi::UiState;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFocus {
    #[default]
    Favorite,
    Compare,
    Share,
    Quantity,
    Unit,
    AddToCart,
}

impl CardFocus {
    pub const ORDER: [CardFocus; 6] = [
        CardFocus::Favorite,
        CardFocus::Compare,
        CardFocus::Share,
        CardFocus::Quantity,
        CardFocus::Unit,
        CardFocus::AddToCart,
    ];

    /// Accessible label of the control.
    pub fn label(self) -> &'static str {
        match self {
            CardFocus::Favorite => "Add to favorites",
            CardFocus::Compare => "Compare",
            CardFocus::Share => "Share",
            CardFocus::Quantity => "Quantity",
            CardFocus::Unit => "Unit",
            CardFocus::AddToCart => "Add to cart",
        }
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }
}

/// Transient state owned by one mounted card.
///
/// `quantity` never drops below [`MIN_QUANTITY`]; only the reducer writes
/// these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    pub(super) quantity: u32,
    pub(super) is_favorite: bool,
    /// Uncontrolled selection; seeded from the payload, never reported back.
    pub(super) unit: Unit,
    pub(super) focus: CardFocus,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            quantity: MIN_QUANTITY,
            is_favorite: false,
            unit: Unit::default(),
            focus: CardFocus::default(),
        }
    }
}

impl UiState for CardState {}

impl CardState {
    /// Fresh state for a newly mounted card showing `product`.
    pub fn for_product(product: &ProductDisplay) -> Self {
        Self {
            unit: product.unit,
            ..Self::default()
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn focus(&self) -> CardFocus {
        self.focus
    }
}
