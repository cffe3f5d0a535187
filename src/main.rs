mod calc;
mod charts;
mod config;
mod data;
mod dom;
mod error;
mod filter;
mod format;
mod pages;
mod submission;
mod support_api;
mod toast;
mod wallet;

use std::rc::Rc;

use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::format::format_signed_percentage;
use crate::pages::{
    CalculatorPage, DashboardPage, DepositPage, InvestmentsPage, PortfolioPage, SupportPage,
    TransactionsPage, WithdrawPage,
};
use crate::submission::{Delay, TimerDelay};
use crate::toast::{Notice, Notifier, Toast, ToastAction, ToastHost, ToastStack};
use crate::wallet::WithdrawVariant;

/// Viewport width above which the sidebar is always laid out inline.
const SIDEBAR_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Dashboard,
    Portfolio,
    Investments,
    Transactions,
    Deposit,
    Withdraw,
    Wallets,
    Support,
    Calculator,
}

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    UpRight,
    TrendingUp,
    Wallet,
    BarChart,
}

/// Off-canvas sidebar state for narrow viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SidebarState {
    open: bool,
}

impl SidebarState {
    fn toggled(self) -> Self {
        SidebarState { open: !self.open }
    }

    fn closed(self) -> Self {
        SidebarState { open: false }
    }

    fn resized(self, width: f64) -> Self {
        if width > SIDEBAR_BREAKPOINT_PX {
            self.closed()
        } else {
            self
        }
    }
}

enum SidebarAction {
    Toggle,
    Close,
    Resize(f64),
}

impl Reducible for SidebarState {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SidebarAction::Toggle => self.toggled(),
            SidebarAction::Close => self.closed(),
            SidebarAction::Resize(width) => self.resized(width),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Children,
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    let sidebar = use_reducer_eq(SidebarState::default);

    {
        let sidebar = sidebar.clone();
        use_effect_with_deps(
            move |_| {
                let listener =
                    dom::ResizeListener::new(move |width| sidebar.dispatch(SidebarAction::Resize(width)));
                move || drop(listener)
            },
            (),
        );
    }

    use_effect_with_deps(
        move |open: &bool| {
            dom::lock_body_scroll(*open);
            || dom::lock_body_scroll(false)
        },
        sidebar.open,
    );

    let on_toggle = {
        let sidebar = sidebar.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            sidebar.dispatch(SidebarAction::Toggle);
        })
    };

    let on_backdrop = {
        let sidebar = sidebar.clone();
        Callback::from(move |_| sidebar.dispatch(SidebarAction::Close))
    };

    // picking a page on a phone also closes the drawer
    let on_select = {
        let sidebar = sidebar.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |page: Page| {
            sidebar.dispatch(SidebarAction::Close);
            on_select.emit(page);
        })
    };

    html! {
        <div class="dashboard-wrapper d-flex">
            <Sidebar active_page={props.active_page} on_select={on_select} open={sidebar.open} />
            if sidebar.open {
                <div class="sidebar-backdrop show" onclick={on_backdrop}></div>
            }
            <div class="main-content flex-grow-1 d-flex flex-column">
                <Header on_toggle={on_toggle} />
                <main class="flex-grow-1 overflow-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    on_toggle: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let show_notifications = use_state(|| false);
    let toggle_notifications = {
        let show_notifications = show_notifications.clone();
        Callback::from(move |_| show_notifications.set(!*show_notifications))
    };

    let notifications = [
        ("Deposit confirmed", "Your bank transfer of $2,500.00 has cleared.", "Just now"),
        ("Investment update", "Crypto Portfolio is up 16.2% since you started.", "2h ago"),
    ];

    html! {
        <header class="top-header d-flex align-items-center justify-content-between px-4 py-3 border-bottom">
            <button type="button" class="sidebar-toggle btn btn-link d-md-none" aria-label="Toggle sidebar" onclick={props.on_toggle.clone()}>
                { icon_menu() }
            </button>
            <div class="flex-grow-1"></div>
            <div class="position-relative">
                <button class="btn btn-link position-relative" aria-label="Notifications" onclick={toggle_notifications}>
                    { icon_bell() }
                    <span class="position-absolute top-0 start-100 translate-middle p-1 bg-danger rounded-circle"></span>
                </button>
                if *show_notifications {
                    <div class="dropdown-menu dropdown-menu-end show shadow" style="width: 320px; right: 0;">
                        <h6 class="dropdown-header">{"Notifications"}</h6>
                        { for notifications.iter().map(|(title, message, time)| html! {
                            <div class="dropdown-item-text border-top py-2">
                                <div class="d-flex justify-content-between">
                                    <strong class="small">{ *title }</strong>
                                    <span class="text-muted small">{ *time }</span>
                                </div>
                                <p class="text-muted small mb-0">{ *message }</p>
                            </div>
                        }) }
                    </div>
                }
            </div>
        </header>
    }
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

const NAV_ITEMS: [NavItem; 9] = [
    NavItem { label: "Dashboard", page: Page::Dashboard, icon: icon_layout_grid },
    NavItem { label: "Portfolio", page: Page::Portfolio, icon: icon_pie_chart },
    NavItem { label: "Investments", page: Page::Investments, icon: icon_trending_up },
    NavItem { label: "Transactions", page: Page::Transactions, icon: icon_list },
    NavItem { label: "Deposit", page: Page::Deposit, icon: icon_plus },
    NavItem { label: "Withdraw", page: Page::Withdraw, icon: icon_arrow_up_right },
    NavItem { label: "Crypto Wallets", page: Page::Wallets, icon: icon_wallet },
    NavItem { label: "Support", page: Page::Support, icon: icon_help },
    NavItem { label: "Returns Calculator", page: Page::Calculator, icon: icon_bar_chart },
];

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    on_select: Callback<Page>,
    open: bool,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class={classes!("sidebar", props.open.then_some("show"))}>
            <div class="sidebar-brand d-flex align-items-center gap-2 px-3 mb-4">
                <span class="fs-4 fw-bold">{"Pipsmade"}</span>
            </div>
            <ul class="nav flex-column">
                { for NAV_ITEMS.iter().map(|item| {
                    let is_active = item.page == props.active_page;
                    let on_select = props.on_select.clone();
                    let page = item.page;
                    html! {
                        <li class="nav-item">
                            <button type="button" class={classes!("nav-link", "d-flex", "align-items-center", "gap-2", "w-100", is_active.then_some("active"))}
                                onclick={Callback::from(move |_| on_select.emit(page))}>
                                <span class="nav-icon">{ (item.icon)() }</span>
                                <span>{ item.label }</span>
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}

fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="container-fluid p-4">
            <div class="d-flex align-items-center justify-content-between pb-3 mb-4 border-bottom">
                <h1 class="h3 mb-0">{ title }</h1>
                { actions }
            </div>
            { children }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: String,
    change: f64,
    icon: StatIcon,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let trend = if props.change < 0.0 { "text-danger" } else { "text-success" };
    html! {
        <div class="card stats-card h-100">
            <div class="card-body d-flex justify-content-between align-items-start">
                <div>
                    <p class="text-muted small text-uppercase mb-1">{ props.title }</p>
                    <h4 class="stat-amount mb-1">{ props.value.clone() }</h4>
                    <small class={classes!("stat-change", trend)}>{ format_signed_percentage(props.change) }</small>
                </div>
                <div class="stat-icon p-2 rounded bg-light">
                    {
                        match props.icon {
                            StatIcon::UpRight => icon_arrow_up_right(),
                            StatIcon::TrendingUp => icon_trending_up(),
                            StatIcon::Wallet => icon_wallet(),
                            StatIcon::BarChart => icon_bar_chart(),
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo(|_| config::load_config(), ());
    let active_page = use_state(|| Page::Dashboard);
    let toasts = use_reducer(ToastStack::default);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let notifier = {
        let toasts = toasts.clone();
        let lifetime = AppConfig::millis(config.timings.toast_ms);
        Notifier(Callback::from(move |notice: Notice| {
            log::debug!("toast {:?}: {}", notice.level, notice.message);
            let id = Uuid::new_v4();
            toasts.dispatch(ToastAction::Push(Toast {
                id,
                message: notice.message,
                level: notice.level,
            }));
            let toasts = toasts.clone();
            spawn_local(async move {
                TimerDelay.wait(lifetime).await;
                toasts.dispatch(ToastAction::Dismiss(id));
            });
        }))
    };

    let on_close_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Portfolio => html! { <PortfolioPage /> },
        Page::Investments => html! { <InvestmentsPage /> },
        Page::Transactions => html! { <TransactionsPage /> },
        Page::Deposit => html! { <DepositPage /> },
        Page::Withdraw => html! { <WithdrawPage key="basic" variant={WithdrawVariant::Basic} /> },
        Page::Wallets => html! { <WithdrawPage key="wallets" variant={WithdrawVariant::Wallets} /> },
        Page::Support => html! { <SupportPage /> },
        Page::Calculator => html! { <CalculatorPage /> },
    };

    let stack: Rc<ToastStack> = Rc::new((*toasts).clone());

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <ContextProvider<Notifier> context={notifier}>
                <Layout active_page={*active_page} on_select={on_select}>
                    { content }
                </Layout>
                <ToastHost stack={stack} on_close={on_close_toast} />
            </ContextProvider<Notifier>>
        </ContextProvider<AppConfig>>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_bell() -> Html {
    icon_base("M18 8a6 6 0 10-12 0c0 7-3 7-3 7h18s-3 0-3-7")
}
fn icon_menu() -> Html {
    icon_base("M3 6h18M3 12h18M3 18h18")
}
fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
fn icon_pie_chart() -> Html {
    icon_base("M21.21 15.89A10 10 0 118 2.83M22 12A10 10 0 0012 2v10z")
}
fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
fn icon_list() -> Html {
    icon_base("M8 6h13M8 12h13M8 18h13M3 6h.01M3 12h.01M3 18h.01")
}
fn icon_help() -> Html {
    icon_base("M12 22a10 10 0 100-20 10 10 0 000 20zM9.1 9a3 3 0 015.8 1c0 2-3 3-3 3M12 17h.01")
}
fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
fn icon_arrow_up_right() -> Html {
    icon_base("M7 17L17 7M7 7h10v10")
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let level = config::load_config().log_level();
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("starting dashboard");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_toggles_and_closes() {
        let closed = SidebarState::default();
        let open = closed.toggled();
        assert!(open.open);
        assert_eq!(open.toggled(), closed);
        assert_eq!(open.closed(), closed);
    }

    #[test]
    fn wide_resize_closes_sidebar() {
        let open = SidebarState::default().toggled();
        assert_eq!(open.resized(1024.0), SidebarState::default());
        assert_eq!(open.resized(768.0), open);
        assert_eq!(open.resized(375.0), open);
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let closed = Rc::new(SidebarState::default());
        let same = closed.clone().reduce(SidebarAction::Resize(1280.0));
        assert!(Rc::ptr_eq(&closed, &same));
        let open = closed.reduce(SidebarAction::Toggle);
        assert!(open.open);
        assert!(!open.reduce(SidebarAction::Close).open);
    }

    #[test]
    fn every_page_has_one_nav_entry() {
        let pages = [
            Page::Dashboard,
            Page::Portfolio,
            Page::Investments,
            Page::Transactions,
            Page::Deposit,
            Page::Withdraw,
            Page::Wallets,
            Page::Support,
            Page::Calculator,
        ];
        for page in pages {
            assert_eq!(NAV_ITEMS.iter().filter(|item| item.page == page).count(), 1);
        }
    }
}
