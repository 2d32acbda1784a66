//! Admin record pages: purchases, transfers, assignments, expenditures.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use leptos::prelude::*;

use crate::routes::AppRoute;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Purchases,
    Transfers,
    Assignments,
    Expenditures,
}

impl RecordKind {
    pub fn route(self) -> AppRoute {
        match self {
            RecordKind::Purchases => AppRoute::Purchases,
            RecordKind::Transfers => AppRoute::Transfers,
            RecordKind::Assignments => AppRoute::Assignments,
            RecordKind::Expenditures => AppRoute::Expenditures,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RecordKind::Purchases => "Purchases",
            RecordKind::Transfers => "Transfers",
            RecordKind::Assignments => "Assignments",
            RecordKind::Expenditures => "Expenditures",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            RecordKind::Purchases => "Equipment bought for each base.",
            RecordKind::Transfers => "Assets moved between bases.",
            RecordKind::Assignments => "Assets issued to personnel.",
            RecordKind::Expenditures => "Assets consumed or written off.",
        }
    }
}

#[component]
pub fn RecordsPage(kind: RecordKind) -> impl IntoView {
    view! {
        <div class="records-page">
            <header class="records-page__header">
                <a class="btn" href=AppRoute::Admin.path()>"← Admin Panel"</a>
                <h1>{kind.title()}</h1>
            </header>
            <p class="records-page__summary">{kind.summary()}</p>
        </div>
    }
}
