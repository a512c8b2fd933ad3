//! Posten routes, generic over the four ledgers.
//!
//! Schuldner and Gläubiger are admin-only. The two Kunden-posten ledgers are
//! open to users for the records of their own Kunde.

use async_trait::async_trait;
use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::extractors::{PathId, ValidatedJson};
use crate::middleware::AuthCaller;
use crate::response::{ApiResult, created, ok};
use crate::{ApiError, AppState};
use kontor_core::auth::Caller;
use kontor_core::posten::{
    CreateKundenPostenInput, CreateMatPostenInput, UpdateKundenPostenInput, UpdateMatPostenInput,
    ZahlungInput,
};
use kontor_db::entities::{kunden_posten, kunden_posten_mat};
use kontor_db::{
    GlaeubigerRepository, KundenPostenMatRepository, KundenPostenRepository, PostenLedger,
    RepositoryError, SchuldnerRepository,
};

/// A posten ledger exposed over HTTP.
pub trait PostenResource:
    PostenLedger<
        Create: DeserializeOwned + Validate + Send + 'static,
        Update: DeserializeOwned + Validate + Send + 'static,
    > + Sized
    + 'static
{
    /// Whether records belong to a Kunde and users may reach them.
    const KUNDE_SCOPED: bool;

    /// Opens the repository on a connection.
    fn open(db: DatabaseConnection) -> Self;

    /// Kunde a stored record belongs to.
    fn kunde_of(record: &Self::Record) -> Option<i32>;

    /// Kunde named by a create payload.
    fn kunde_in_create(input: &Self::Create) -> Option<i32>;

    /// Kunde a partial update moves the record to.
    fn kunde_in_update(input: &Self::Update) -> Option<i32>;
}

/// Kunden-posten ledgers that can be listed per Kunde.
#[async_trait]
pub trait KundenResource: PostenResource {
    /// Lists the records of one Kunde, newest first.
    async fn for_kunde(&self, kunde_id: i32) -> Result<Vec<Self::Record>, RepositoryError>;
}

impl PostenResource for SchuldnerRepository {
    const KUNDE_SCOPED: bool = false;

    fn open(db: DatabaseConnection) -> Self {
        Self::new(db)
    }

    fn kunde_of(_: &Self::Record) -> Option<i32> {
        None
    }

    fn kunde_in_create(_: &Self::Create) -> Option<i32> {
        None
    }

    fn kunde_in_update(_: &Self::Update) -> Option<i32> {
        None
    }
}

impl PostenResource for GlaeubigerRepository {
    const KUNDE_SCOPED: bool = false;

    fn open(db: DatabaseConnection) -> Self {
        Self::new(db)
    }

    fn kunde_of(_: &Self::Record) -> Option<i32> {
        None
    }

    fn kunde_in_create(_: &Self::Create) -> Option<i32> {
        None
    }

    fn kunde_in_update(_: &Self::Update) -> Option<i32> {
        None
    }
}

impl PostenResource for KundenPostenRepository {
    const KUNDE_SCOPED: bool = true;

    fn open(db: DatabaseConnection) -> Self {
        Self::new(db)
    }

    fn kunde_of(record: &kunden_posten::Model) -> Option<i32> {
        Some(record.kunde_id)
    }

    fn kunde_in_create(input: &CreateKundenPostenInput) -> Option<i32> {
        Some(input.kunde_id)
    }

    fn kunde_in_update(input: &UpdateKundenPostenInput) -> Option<i32> {
        input.kunde_id
    }
}

#[async_trait]
impl KundenResource for KundenPostenRepository {
    async fn for_kunde(&self, kunde_id: i32) -> Result<Vec<Self::Record>, RepositoryError> {
        self.list_by_kunde(kunde_id).await
    }
}

impl PostenResource for KundenPostenMatRepository {
    const KUNDE_SCOPED: bool = true;

    fn open(db: DatabaseConnection) -> Self {
        Self::new(db)
    }

    fn kunde_of(record: &kunden_posten_mat::Model) -> Option<i32> {
        Some(record.kunde_id)
    }

    fn kunde_in_create(input: &CreateMatPostenInput) -> Option<i32> {
        Some(input.kunde_id)
    }

    fn kunde_in_update(input: &UpdateMatPostenInput) -> Option<i32> {
        input.kunde_id
    }
}

#[async_trait]
impl KundenResource for KundenPostenMatRepository {
    async fn for_kunde(&self, kunde_id: i32) -> Result<Vec<Self::Record>, RepositoryError> {
        self.list_by_kunde(kunde_id).await
    }
}

/// Routes of an admin-only ledger.
pub fn routes<L: PostenResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<L>).post(create::<L>))
        .merge(record_routes::<L>())
}

/// Routes of a Kunden-posten ledger.
pub fn kunden_routes<L: KundenResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list_scoped::<L>).post(create::<L>))
        .route("/kunde/{kunde_id}", get(list_for_kunde::<L>))
        .merge(record_routes::<L>())
}

fn record_routes<L: PostenResource>() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(get_one::<L>).put(update::<L>).delete(delete::<L>),
        )
        .route("/{id}/zahlung", post(zahlung::<L>))
}

/// Checks access to the records of `kunde_id`; ledgers without a Kunde are
/// admin-only.
fn authorize<L: PostenResource>(caller: Caller, kunde_id: Option<i32>) -> Result<(), ApiError> {
    match kunde_id {
        Some(kunde_id) if L::KUNDE_SCOPED => caller.ensure_kunde(kunde_id)?,
        _ => caller.require_admin()?,
    }
    Ok(())
}

/// Checks access to a stored record, loading it only for scoped users.
async fn authorize_record<L: PostenResource>(
    repo: &L,
    caller: Caller,
    id: i32,
) -> Result<(), ApiError> {
    if !L::KUNDE_SCOPED || caller.require_admin().is_ok() {
        return authorize::<L>(caller, None);
    }
    let record = repo.get(id).await?;
    authorize::<L>(caller, L::kunde_of(&record))
}

async fn list<L: PostenResource>(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
) -> ApiResult {
    authorize::<L>(caller, None)?;
    Ok(ok(L::open(state.conn()).list().await?))
}

async fn list_scoped<L: KundenResource>(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
) -> ApiResult {
    let repo = L::open(state.conn());
    let records = match caller.kunde_scope()? {
        Some(kunde_id) => repo.for_kunde(kunde_id).await?,
        None => repo.list().await?,
    };
    Ok(ok(records))
}

async fn list_for_kunde<L: KundenResource>(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(kunde_id): PathId,
) -> ApiResult {
    caller.ensure_kunde(kunde_id)?;
    Ok(ok(L::open(state.conn()).for_kunde(kunde_id).await?))
}

async fn get_one<L: PostenResource>(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
) -> ApiResult {
    let repo = L::open(state.conn());
    authorize_record(&repo, caller, id).await?;
    Ok(ok(repo.get(id).await?))
}

async fn create<L: PostenResource>(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(payload): ValidatedJson<L::Create>,
) -> ApiResult {
    authorize::<L>(caller, L::kunde_in_create(&payload))?;
    Ok(created(L::open(state.conn()).create(payload).await?))
}

async fn update<L: PostenResource>(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<L::Update>,
) -> ApiResult {
    let repo = L::open(state.conn());
    authorize_record(&repo, caller, id).await?;
    if let Some(kunde_id) = L::kunde_in_update(&payload) {
        authorize::<L>(caller, Some(kunde_id))?;
    }
    Ok(ok(repo.update(id, payload).await?))
}

async fn delete<L: PostenResource>(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
) -> ApiResult {
    let repo = L::open(state.conn());
    authorize_record(&repo, caller, id).await?;
    Ok(ok(repo.delete(id).await?))
}

async fn zahlung<L: PostenResource>(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<ZahlungInput>,
) -> ApiResult {
    let repo = L::open(state.conn());
    authorize_record(&repo, caller, id).await?;
    Ok(ok(repo.verbuche_zahlung(id, payload.betrag).await?))
}
