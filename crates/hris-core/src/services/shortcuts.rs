//! Built-in admin shortcut tree

use std::sync::Arc;

use crate::domain::{AppCommand, Icon, Shortcut, BACKSPACE_KEY};
use hris_shared::constants::{DASHBOARD_ROUTE, HELP_CENTER_URL};

/// Receives the commands emitted by built-in shortcuts.
pub type CommandSink = Arc<dyn Fn(AppCommand) + Send + Sync>;

fn emit(sink: &CommandSink, key: &str, action: &str, icon: Icon, command: AppCommand) -> Shortcut {
    let sink = Arc::clone(sink);
    Shortcut::leaf(key, action, icon, move |_| sink(command.clone()))
}

fn goto(sink: &CommandSink, key: &str, action: &str, icon: Icon, route: &str) -> Shortcut {
    emit(sink, key, action, icon, AppCommand::Goto(route.to_string()))
}

pub fn admin_shortcuts(sink: CommandSink) -> Vec<Shortcut> {
    let s = &sink;
    vec![
        Shortcut::branch(
            "g",
            "Go To",
            Icon::Link,
            vec![
                goto(s, "d", "Dashboard", Icon::LayoutDashboard, DASHBOARD_ROUTE),
                Shortcut::branch(
                    "p",
                    "Profile",
                    Icon::UserCog,
                    vec![
                        goto(s, "i", "Information", Icon::CircleUser, "/admin/profile/information"),
                        goto(s, "s", "Schedule", Icon::CalendarHeart, "/admin/profile/schedule"),
                    ],
                ),
                Shortcut::branch(
                    "s",
                    "Settings",
                    Icon::Settings,
                    vec![
                        Shortcut::branch(
                            "r",
                            "Role",
                            Icon::Shield,
                            vec![
                                goto(s, "l", "List", Icon::Shield, "/admin/settings/role"),
                                goto(s, "a", "Add", Icon::UserPlus, "/admin/settings/role/create"),
                            ],
                        ),
                        Shortcut::branch(
                            "c",
                            "Contact",
                            Icon::UserPlus,
                            vec![
                                goto(s, "l", "List", Icon::UserPlus, "/admin/settings/contact"),
                                goto(s, "a", "Add Contact", Icon::UserPlus, "/admin/settings/contact/create"),
                            ],
                        ),
                        goto(s, "p", "Product", Icon::Package, "/admin/settings/product"),
                        goto(s, "a", "Calendar", Icon::Calendar, "/admin/settings/calendar"),
                    ],
                ),
                Shortcut::branch(
                    "u",
                    "Purchase",
                    Icon::ShoppingCart,
                    vec![
                        goto(s, "o", "Purchase Order", Icon::ClipboardList, "/admin/purchase/order"),
                        goto(s, "b", "Bill", Icon::FileText, "/admin/purchase/bill"),
                        goto(s, "r", "Receipt Voucher", Icon::Receipt, "/admin/purchase/receipt"),
                    ],
                ),
                Shortcut::branch(
                    "a",
                    "Sales",
                    Icon::ChartColumn,
                    vec![
                        goto(s, "q", "Quotation", Icon::File, "/admin/sales/quotation"),
                        goto(s, "i", "Invoice", Icon::FileX, "/admin/sales/invoice"),
                        goto(s, "p", "Payment Voucher", Icon::FileText, "/admin/sales/payment"),
                    ],
                ),
                Shortcut::branch(
                    "h",
                    "HR",
                    Icon::Users,
                    vec![
                        goto(s, "e", "Employee", Icon::UserCheck, "/admin/hr/employee"),
                        goto(s, "n", "Intern", Icon::SquareUser, "/admin/hr/intern"),
                        goto(s, "l", "Leave", Icon::CalendarMinus, "/admin/hr/leave"),
                    ],
                ),
                Shortcut::branch(
                    "r",
                    "Report",
                    Icon::ChartPie,
                    vec![
                        goto(s, "i", "Income", Icon::ChartColumnIncreasing, "/admin/report/income"),
                        goto(s, "e", "Expenditure", Icon::ChartColumnDecreasing, "/admin/report/expenditure"),
                        goto(s, "s", "Sales", Icon::ChartBarStacked, "/admin/report/sales"),
                    ],
                ),
            ],
        ),
        emit(s, "F11", "Full Screen", Icon::Fullscreen, AppCommand::ToggleFullscreen),
        emit(s, "Z", "Zen Mode", Icon::EyeOff, AppCommand::ToggleZenMode),
        emit(s, "/", "Search", Icon::Search, AppCommand::FocusSearch),
        emit(s, BACKSPACE_KEY, "Go Back", Icon::ArrowLeft, AppCommand::GoBack),
        emit(
            s,
            "?",
            "Open Help Center",
            Icon::HelpCircle,
            AppCommand::OpenExternal(HELP_CENTER_URL.to_string()),
        ),
    ]
}
