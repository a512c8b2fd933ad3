//! Schuldner (money owed to the business) and Gläubiger (money the business
//! owes). Both ledgers share one record shape labelled by `name`.

use kontor_core::posten::{CreatePostenInput, UpdatePostenInput};

use super::ledger::impl_posten_ledger;

macro_rules! named_posten_repository {
    ($(#[$meta:meta])* $repo:ident, $entity:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $repo {
            db: ::sea_orm::DatabaseConnection,
        }

        impl $repo {
            /// Creates a new repository.
            #[must_use]
            pub const fn new(db: ::sea_orm::DatabaseConnection) -> Self {
                Self { db }
            }

            async fn insert(
                &self,
                input: CreatePostenInput,
            ) -> Result<$crate::entities::$entity::Model, $crate::repositories::RepositoryError> {
                use ::sea_orm::{ActiveModelTrait, NotSet, Set};

                let stand = ::kontor_core::posten::Stand::neu(input.betrag, input.bezahlt);
                let now = ::chrono::Utc::now();

                let posten = $crate::entities::$entity::ActiveModel {
                    id: NotSet,
                    datum: Set(input.datum),
                    name: Set(input.name),
                    betrag: Set(stand.betrag),
                    bezahlt: Set(stand.bezahlt),
                    offen: Set(stand.offen),
                    status: Set(stand.status.into()),
                    faelligkeit: Set(input.faelligkeit),
                    notiz: Set(input.notiz),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(posten.insert(&self.db).await?)
            }

            async fn apply(
                &self,
                id: i32,
                input: UpdatePostenInput,
            ) -> Result<$crate::entities::$entity::Model, $crate::repositories::RepositoryError> {
                use ::sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};

                let txn = self.db.begin().await?;
                let current = $crate::entities::$entity::Entity::find_by_id(id)
                    .one(&txn)
                    .await?
                    .ok_or($crate::repositories::RepositoryError::not_found(
                        <Self as $crate::repositories::PostenLedger>::ENTITY,
                        id,
                    ))?;

                let stand = ::kontor_core::posten::Stand::berechnen(current.betrag, current.bezahlt)
                    .geaendert(input.betrag, input.bezahlt);

                let mut posten: $crate::entities::$entity::ActiveModel = current.into();
                if let Some(datum) = input.datum {
                    posten.datum = Set(datum);
                }
                if let Some(name) = input.name {
                    posten.name = Set(name);
                }
                if let Some(faelligkeit) = input.faelligkeit {
                    posten.faelligkeit = Set(faelligkeit);
                }
                if let Some(notiz) = input.notiz {
                    posten.notiz = Set(notiz);
                }
                posten.betrag = Set(stand.betrag);
                posten.bezahlt = Set(stand.bezahlt);
                posten.offen = Set(stand.offen);
                posten.status = Set(stand.status.into());
                posten.updated_at = Set(::chrono::Utc::now());

                let updated = posten.update(&txn).await?;
                txn.commit().await?;
                Ok(updated)
            }
        }

        impl_posten_ledger!($repo, $entity, $label, CreatePostenInput, UpdatePostenInput);
    };
}

named_posten_repository!(
    /// Schuldner ledger repository.
    SchuldnerRepository,
    schuldner,
    "Schuldner"
);

named_posten_repository!(
    /// Gläubiger ledger repository.
    GlaeubigerRepository,
    glaeubiger,
    "Gläubiger"
);
