//! Enums stored as strings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use kontor_core::auth;
use kontor_core::posten;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum PostenStatus {
    #[sea_orm(string_value = "offen")]
    Offen,
    #[sea_orm(string_value = "bezahlt")]
    Bezahlt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "user")]
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[sea_orm(string_value = "bootstrap")]
    Bootstrap,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "disabled")]
    Disabled,
}

impl From<posten::PostenStatus> for PostenStatus {
    fn from(status: posten::PostenStatus) -> Self {
        match status {
            posten::PostenStatus::Offen => Self::Offen,
            posten::PostenStatus::Bezahlt => Self::Bezahlt,
        }
    }
}

impl From<UserRole> for auth::UserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::User => Self::User,
        }
    }
}

impl From<UserStatus> for auth::UserStatus {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Bootstrap => Self::Bootstrap,
            UserStatus::Pending => Self::Pending,
            UserStatus::Active => Self::Active,
            UserStatus::Disabled => Self::Disabled,
        }
    }
}

impl From<auth::UserStatus> for UserStatus {
    fn from(status: auth::UserStatus) -> Self {
        match status {
            auth::UserStatus::Bootstrap => Self::Bootstrap,
            auth::UserStatus::Pending => Self::Pending,
            auth::UserStatus::Active => Self::Active,
            auth::UserStatus::Disabled => Self::Disabled,
        }
    }
}
