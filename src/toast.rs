//! Transient notifications. Pages reach them through the [`Notifier`]
//! context instead of a global helper object.

use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn alert_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "alert-success",
            ToastLevel::Info => "alert-info",
            ToastLevel::Warning => "alert-warning",
            ToastLevel::Error => "alert-danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            // already gone when the user closed it first
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastStack { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct Notifier(pub Callback<Notice>);

impl Default for Notifier {
    fn default() -> Self {
        Notifier(Callback::from(|notice: Notice| {
            log::debug!("no toast host mounted, dropping: {}", notice.message);
        }))
    }
}

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, level: ToastLevel) {
        self.0.emit(Notice {
            message: message.into(),
            level,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Success);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Info);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Warning);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Error);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub stack: Rc<ToastStack>,
    pub on_close: Callback<Uuid>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast-host position-fixed" style="top: 20px; right: 20px; z-index: 9999; min-width: 300px;">
            { for props.stack.toasts.iter().map(|toast| {
                let on_close = props.on_close.clone();
                let id = toast.id;
                html! {
                    <div key={id.to_string()} class={classes!("alert", toast.level.alert_class(), "alert-dismissible", "fade", "show")} role="alert">
                        { toast.message.clone() }
                        <button type="button" class="btn-close" aria-label="Close" onclick={Callback::from(move |_| on_close.emit(id))}></button>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(message: &str) -> Toast {
        Toast {
            id: Uuid::new_v4(),
            message: message.to_string(),
            level: ToastLevel::Info,
        }
    }

    #[test]
    fn push_then_dismiss() {
        let a = toast("first");
        let b = toast("second");
        let stack = Rc::new(ToastStack::default())
            .reduce(ToastAction::Push(a.clone()))
            .reduce(ToastAction::Push(b.clone()));
        assert_eq!(stack.toasts.len(), 2);

        let stack = stack.reduce(ToastAction::Dismiss(a.id));
        assert_eq!(stack.toasts, vec![b.clone()]);

        // a late timer for a toast closed by hand is a no-op
        let stack = stack.reduce(ToastAction::Dismiss(a.id));
        assert_eq!(stack.toasts, vec![b]);
    }

    #[test]
    fn error_level_maps_to_danger_alert() {
        assert_eq!(ToastLevel::Error.alert_class(), "alert-danger");
        assert_eq!(ToastLevel::Success.alert_class(), "alert-success");
    }
}
