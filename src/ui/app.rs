use crate::asset::Thumbnail;
use crate::catalog::ProductDisplay;
use crate::config::PageConfig;
use crate::ui::card::{CardIntent, CardReducer, CardState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Display container: holds the fixed payload and the mounted card.
pub struct App {
    should_quit: bool,
    product: ProductDisplay,
    page: PageConfig,
    /// Card state (MVI pattern). Reset whenever a card is mounted.
    card: CardState,
    /// Decoded product image, if one could be loaded.
    thumbnail: Option<Thumbnail>,
}

impl App {
    pub fn new(product: ProductDisplay, page: PageConfig) -> Self {
        let card = CardState::for_product(&product);
        Self {
            should_quit: false,
            product,
            page,
            card,
            thumbnail: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: Option<Thumbnail>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn product(&self) -> &ProductDisplay {
        &self.product
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    pub fn card(&self) -> &CardState {
        &self.card
    }

    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Feeds an intent through the card reducer.
    pub fn dispatch(&mut self, intent: CardIntent) {
        tracing::debug!(?intent, "card intent");
        if let Some(control) = intent.affordance() {
            tracing::info!(
                control,
                quantity = self.card.quantity(),
                unit = %self.card.unit(),
                "affordance activated, no action wired"
            );
        }
        dispatch_mvi!(self, card, CardReducer, intent);
    }
}
