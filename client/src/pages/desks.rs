//! Role dashboards: admin control panel, base commander and logistics desks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each desk is mounted behind `ProtectedRoute`. Desks list the work areas
//! their role handles and link only to routes every admitted role can open.
//! The cards are placeholders; record tables and forms are not rendered.

#[cfg(test)]
#[path = "desks_test.rs"]
mod desks_test;

use leptos::prelude::*;

use crate::routes::AppRoute;

/// One card on a desk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeskModule {
    pub title: &'static str,
    pub description: &'static str,
    /// Page the card opens, if any.
    pub route: Option<AppRoute>,
}

/// Which desk to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Desk {
    Admin,
    Commander,
    Logistics,
}

impl Desk {
    pub const ALL: [Desk; 3] = [Desk::Admin, Desk::Commander, Desk::Logistics];

    pub fn route(self) -> AppRoute {
        match self {
            Desk::Admin => AppRoute::Admin,
            Desk::Commander => AppRoute::Commander,
            Desk::Logistics => AppRoute::Logistics,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Desk::Admin => "Admin Control Panel",
            Desk::Commander => "Base Commander Dashboard",
            Desk::Logistics => "Logistics Officer Dashboard",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Desk::Admin => "Full System Access",
            Desk::Commander => "Base overview and transfers",
            Desk::Logistics => "Purchases, transfers, assignments and expenditures",
        }
    }

    pub fn modules(self) -> &'static [DeskModule] {
        match self {
            Desk::Admin => ADMIN_MODULES,
            Desk::Commander => COMMANDER_MODULES,
            Desk::Logistics => LOGISTICS_MODULES,
        }
    }
}

const ADMIN_MODULES: &[DeskModule] = &[
    DeskModule {
        title: "Purchases",
        description: "View purchase history and records",
        route: Some(AppRoute::Purchases),
    },
    DeskModule {
        title: "Transfers",
        description: "Monitor asset transfers between bases",
        route: Some(AppRoute::Transfers),
    },
    DeskModule {
        title: "Assignments",
        description: "Track personnel asset assignments",
        route: Some(AppRoute::Assignments),
    },
    DeskModule {
        title: "Expenditures",
        description: "Review asset consumption logs",
        route: Some(AppRoute::Expenditures),
    },
];

const COMMANDER_MODULES: &[DeskModule] = &[
    DeskModule {
        title: "Base Overview",
        description: "Opening and closing balances for your base",
        route: None,
    },
    DeskModule {
        title: "Base Transfers",
        description: "Transfers into and out of your base",
        route: None,
    },
    DeskModule {
        title: "Common Dashboard",
        description: "Movement summary across all bases",
        route: Some(AppRoute::Dashboard),
    },
];

const LOGISTICS_MODULES: &[DeskModule] = &[
    DeskModule {
        title: "Create New Purchase",
        description: "Record equipment bought for a base",
        route: None,
    },
    DeskModule {
        title: "Create Asset Transfer",
        description: "Move assets between bases",
        route: None,
    },
    DeskModule {
        title: "Create Asset Assignment",
        description: "Assign assets to personnel",
        route: None,
    },
    DeskModule {
        title: "Record Asset Expenditure",
        description: "Log consumed or expended assets",
        route: None,
    },
];

#[component]
pub fn DeskPage(desk: Desk) -> impl IntoView {
    view! {
        <div class="desk-page">
            <header class="desk-page__header">
                <h1>{desk.heading()}</h1>
                <small>{desk.tagline()}</small>
            </header>
            <div class="desk-page__cards">
                {desk
                    .modules()
                    .iter()
                    .map(|module| {
                        view! {
                            <div class="desk-card">
                                <h2 class="desk-card__title">{module.title}</h2>
                                <p class="desk-card__description">{module.description}</p>
                                {module
                                    .route
                                    .map(|route| {
                                        view! {
                                            <a class="btn btn--primary" href=route.path()>
                                                "Open"
                                            </a>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
