use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use models::Person;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// List entry: the store key alongside the record it maps to.
#[derive(Serialize, Debug)]
pub struct PersonEntry {
    pub id: String,
    pub email: String,
    pub name: String,
}

pub async fn list_persons(State(state): State<ServerState>) -> Json<Vec<PersonEntry>> {
    let items = state
        .persons
        .list()
        .await
        .into_iter()
        .map(|(id, p)| PersonEntry { id, email: p.email, name: p.name })
        .collect::<Vec<_>>();
    Json(items)
}

pub async fn get_person(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<Person>, ApiError> {
    match state.persons.get(&name).await {
        Some(person) => Ok(Json(person)),
        None => Err(ApiError::NotFound(format!("person {name}"))),
    }
}

/// Insert or replace wholesale. An undecodable body is rejected by the
/// `Json` extractor before this runs, so a failed request never leaves a
/// partial record behind.
pub async fn put_person(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(person): Json<Person>,
) -> StatusCode {
    state.persons.put(name, person).await;
    StatusCode::OK
}

/// Idempotent: deleting an absent record is still a 200.
pub async fn delete_person(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> StatusCode {
    state.persons.delete(&name).await;
    StatusCode::OK
}
