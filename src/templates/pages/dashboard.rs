use crate::domain::notifications::{notifications_for, Role};
use crate::domain::property::{ListingStatus, PropertyRecord};
use crate::domain::ui_state::{DashboardChrome, UserInfo};
use crate::templates::components::property_card;
use crate::templates::{card, dashboard_layout};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub role: Role,
    pub chrome: DashboardChrome,
    pub user: UserInfo,
    /// Every listing, in storage order.
    pub listings: &'a [PropertyRecord],
    /// Newest first, already capped.
    pub recent: Vec<&'a PropertyRecord>,
}

impl DashboardVm<'_> {
    pub fn count_with_status(&self, status: ListingStatus) -> usize {
        self.listings.iter().filter(|p| p.status == status).count()
    }
}

fn heading(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin Dashboard",
        Role::Agent => "Agent Dashboard",
        Role::User => "My Dashboard",
    }
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let base = vm.role.dashboard_path();
    let href_for = |chrome: DashboardChrome| format!("{base}?{}", chrome.to_query());

    dashboard_layout(
        heading(vm.role),
        vm.role,
        vm.chrome,
        &vm.user,
        &href_for,
        html! {
            h1 { (heading(vm.role)) }
            p class="muted" { "Welcome back, " (vm.user.name) "." }

            div class="grid grid-4 stats" {
                (card("Total Listings", html! { p class="stat" { (vm.listings.len()) } }))
                @for status in ListingStatus::ALL {
                    (card(status.label(), html! { p class="stat" { (vm.count_with_status(status)) } }))
                }
            }

            @if vm.role == Role::Admin {
                (card("Sales Analytics", html! {
                    p { "Daily, monthly and yearly sales with breakdowns by type, location and price." }
                    a class="btn" href=(format!("{base}/sales?{}", vm.chrome.to_query())) { "Open analytics" }
                }))
            }

            (card("Notifications", html! {
                ul class="notification-list" {
                    @for n in notifications_for(vm.role) {
                        li class=(format!("notification {}", n.kind.tint_class())) {
                            span class="notification-icon" { (n.kind.icon()) }
                            div {
                                p class="notification-title" { (n.title) }
                                p class="notification-message" { (n.message) }
                                p class="notification-time" { (n.time) }
                            }
                        }
                    }
                }
            }))

            section {
                h2 { "Recently Listed" }
                div class="grid grid-3" {
                    @for p in &vm.recent {
                        (property_card(p))
                    }
                }
            }
        },
    )
}
