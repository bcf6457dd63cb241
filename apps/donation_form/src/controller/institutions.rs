//! Institution picker: fetch, render as cards, exclusive selection.

use client_core::DonationApi;
use shared::{domain::InstitutionId, protocol::Institution};
use thiserror::Error;
use tracing::{error, info};

use super::events::{UiError, UiErrorContext};

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/80?text=No+Logo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionCard {
    pub id: InstitutionId,
    pub display_name: String,
    pub image_url: String,
    pub image_alt: String,
    pub selected: bool,
}

impl InstitutionCard {
    pub fn from_institution(institution: &Institution) -> Self {
        let display_name = non_blank(institution.institution_name.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Name not found (ID: {})", institution.id));
        let image_url = non_blank(institution.url_image.as_deref())
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
            .to_string();
        Self {
            id: institution.id.clone(),
            image_alt: format!("Logo of {display_name}"),
            display_name,
            image_url,
            selected: false,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no institution is listed at position {0}")]
    UnknownIndex(usize),
    #[error("institution '{0}' is not listed")]
    UnknownId(InstitutionId),
}

/// What the institution area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InstitutionPanel {
    #[default]
    Loading,
    /// The fetch failed; no cards.
    Unavailable,
    /// The service answered with an empty list.
    Empty,
    Ready(Vec<InstitutionCard>),
}

impl InstitutionPanel {
    pub fn from_institutions(institutions: &[Institution]) -> Self {
        if institutions.is_empty() {
            return InstitutionPanel::Empty;
        }
        InstitutionPanel::Ready(
            institutions
                .iter()
                .map(InstitutionCard::from_institution)
                .collect(),
        )
    }

    pub fn cards(&self) -> &[InstitutionCard] {
        match self {
            InstitutionPanel::Ready(cards) => cards,
            _ => &[],
        }
    }

    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            InstitutionPanel::Loading => Some("Loading institutions..."),
            InstitutionPanel::Unavailable => {
                Some("Institutions could not be loaded. Please try again later.")
            }
            InstitutionPanel::Empty => Some("No institutions found."),
            InstitutionPanel::Ready(_) => None,
        }
    }

    /// Marks the card at `index` as the only selected one.
    pub fn select_index(&mut self, index: usize) -> Result<&InstitutionId, SelectionError> {
        let InstitutionPanel::Ready(cards) = self else {
            return Err(SelectionError::UnknownIndex(index));
        };
        if index >= cards.len() {
            return Err(SelectionError::UnknownIndex(index));
        }
        for (i, card) in cards.iter_mut().enumerate() {
            card.selected = i == index;
        }
        Ok(&cards[index].id)
    }

    pub fn select_id(&mut self, id: &InstitutionId) -> Result<(), SelectionError> {
        let index = self
            .cards()
            .iter()
            .position(|card| &card.id == id)
            .ok_or_else(|| SelectionError::UnknownId(id.clone()))?;
        self.select_index(index).map(|_| ())
    }

    pub fn selected_id(&self) -> Option<&InstitutionId> {
        self.cards()
            .iter()
            .find(|card| card.selected)
            .map(|card| &card.id)
    }

    pub fn clear_selection(&mut self) {
        if let InstitutionPanel::Ready(cards) = self {
            for card in cards {
                card.selected = false;
            }
        }
    }
}

/// Fetches institutions and renders them. Failures are logged and degrade to
/// [`InstitutionPanel::Unavailable`].
pub async fn load_panel(api: &dyn DonationApi) -> InstitutionPanel {
    match api.list_institutions().await {
        Ok(institutions) => {
            info!(count = institutions.len(), "rendering institutions");
            InstitutionPanel::from_institutions(&institutions)
        }
        Err(err) => {
            let ui_error = UiError::from_client_error(UiErrorContext::LoadInstitutions, &err);
            error!(
                context = ?ui_error.context(),
                category = ?ui_error.category(),
                error = %ui_error.message(),
                "could not load institutions; is the API running?"
            );
            InstitutionPanel::Unavailable
        }
    }
}

#[cfg(test)]
#[path = "tests/institutions_tests.rs"]
mod tests;
