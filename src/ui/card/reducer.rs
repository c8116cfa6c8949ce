use crate::catalog::{clamp_quantity, parse_quantity};
use crate::ui::card::intent::CardIntent;
use crate::ui::card::state::CardState;
use crate::ui::mvi::Reducer;

pub struct CardReducer;

impl Reducer for CardReducer {
    type State = CardState;
    type Intent = CardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CardIntent::ToggleFavorite => CardState {
                is_favorite: !state.is_favorite,
                ..state
            },
            CardIntent::EditQuantity { raw } => CardState {
                quantity: parse_quantity(&raw),
                ..state
            },
            CardIntent::IncrementQuantity => CardState {
                quantity: clamp_quantity(i64::from(state.quantity) + 1),
                ..state
            },
            CardIntent::DecrementQuantity => CardState {
                quantity: clamp_quantity(i64::from(state.quantity) - 1),
                ..state
            },
            CardIntent::SelectUnit(unit) => CardState { unit, ..state },
            CardIntent::NextUnit => CardState {
                unit: state.unit.next(),
                ..state
            },
            CardIntent::PreviousUnit => CardState {
                unit: state.unit.previous(),
                ..state
            },
            CardIntent::FocusNext => CardState {
                focus: state.focus.next(),
                ..state
            },
            CardIntent::FocusPrevious => CardState {
                focus: state.focus.previous(),
                ..state
            },
            CardIntent::AddToCart | CardIntent::Compare | CardIntent::Share => state,
        }
    }
}
