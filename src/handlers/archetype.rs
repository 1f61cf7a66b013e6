// src/handlers/archetype.rs

use axum::{Json, extract::Path, response::IntoResponse};

use crate::{
    error::AppError,
    models::{
        archetype::{ARCHETYPES, Archetype},
        category::Category,
    },
};

/// Lists all archetypes in category order.
pub async fn list_archetypes() -> Json<&'static [Archetype]> {
    Json(&ARCHETYPES)
}

/// Retrieves one archetype by category label or slug.
pub async fn get_archetype(Path(key): Path<String>) -> Result<impl IntoResponse, AppError> {
    let category: Category = key
        .parse()
        .map_err(|_| AppError::NotFound("Archetype not found".to_string()))?;

    Ok(Json(category.archetype()))
}
