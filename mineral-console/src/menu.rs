//! Sidebar menu and section switching.
//!
//! The menu lists the top-level sections. Detail and flow views are not in
//! it; they highlight the section they belong to.

use mineral_nav::ViewId;

const MENU: [ViewId; 19] = [
    ViewId::Dashboard,
    ViewId::Users,
    ViewId::Minerals,
    ViewId::Orders,
    ViewId::Enquiries,
    ViewId::Finance,
    ViewId::Logistics,
    ViewId::Disputes,
    ViewId::Content,
    ViewId::Analytics,
    ViewId::Partners,
    ViewId::Insurance,
    ViewId::AuditLog,
    ViewId::CallHistory,
    ViewId::Notifications,
    ViewId::Search,
    ViewId::Settings,
    ViewId::Profile,
    ViewId::Help,
];

pub fn entries() -> &'static [ViewId] {
    &MENU
}

/// The menu section a view belongs to.
pub fn section(view: ViewId) -> ViewId {
    match view {
        ViewId::OrdersOrderDetail | ViewId::SellOrderDetail | ViewId::BuyOrderDetail => {
            ViewId::Orders
        }
        ViewId::MineralDetail | ViewId::MineralForm | ViewId::SellSubmissionDetail => {
            ViewId::Minerals
        }
        view if view.is_flow_step() => ViewId::Finance,
        view => view,
    }
}

pub fn index(view: ViewId) -> usize {
    let section = section(view);
    MENU.iter().position(|v| *v == section).unwrap_or(0)
}

pub fn from_index(index: usize) -> Option<ViewId> {
    MENU.get(index).copied()
}

pub fn next(view: ViewId) -> ViewId {
    let next = (index(view) + 1) % MENU.len();
    MENU[next]
}

pub fn previous(view: ViewId) -> ViewId {
    let idx = index(view);
    let prev = if idx == 0 { MENU.len() - 1 } else { idx - 1 };
    MENU[prev]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_views_are_their_own_section() {
        for view in entries() {
            assert_eq!(section(*view), *view);
        }
    }

    #[test]
    fn test_every_view_has_a_section_in_menu() {
        for view in ViewId::all() {
            assert!(entries().contains(&section(*view)), "{}", view);
        }
    }

    #[test]
    fn test_next_from_detail_moves_past_its_section() {
        assert_eq!(next(ViewId::BuyOrderDetail), ViewId::Enquiries);
        assert_eq!(previous(ViewId::FinanceTesting), ViewId::Enquiries);
    }

    #[test]
    fn test_wraps_around() {
        assert_eq!(next(ViewId::Help), ViewId::Dashboard);
        assert_eq!(previous(ViewId::Dashboard), ViewId::Help);
    }
}
