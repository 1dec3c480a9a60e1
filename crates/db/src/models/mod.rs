pub mod event;
pub mod event_setting;
pub mod gallery;
pub mod hero;
pub mod sponsor;

use maraton_core::types::DbId;

/// Serialize a numeric primary key as a JSON string.
///
/// The site front-end keys list items by string id.
pub(crate) fn id_as_string<S>(id: &DbId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(id)
}
