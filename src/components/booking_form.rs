use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use crate::client::{submit_booking, ClientError};
use crate::models::booking::{BookingDetails, BookingField};
use crate::utils::leptos_owner::with_owner_safe;

pub const SUCCESS_MESSAGE: &str = "✅ Booking confirmed!";
pub const FAILURE_MESSAGE: &str = "❌ Failed to submit booking.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Confirmed,
    Failed,
}

impl SubmitStatus {
    pub fn from_outcome(outcome: &Result<(), ClientError>) -> Self {
        match outcome {
            Ok(()) => SubmitStatus::Confirmed,
            Err(_) => SubmitStatus::Failed,
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitStatus::Submitting
    }

    pub fn button_label(self) -> &'static str {
        if self.is_submitting() {
            "Processing..."
        } else {
            "Confirm & Pay"
        }
    }

    /// CSS class and text of the status line, if one should be shown.
    pub fn message(self) -> Option<(&'static str, &'static str)> {
        match self {
            SubmitStatus::Confirmed => Some(("text-green-500 mt-2 success", SUCCESS_MESSAGE)),
            SubmitStatus::Failed => Some(("text-red-500 mt-2 error", FAILURE_MESSAGE)),
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        }
    }
}

#[component]
pub fn BookingForm() -> impl IntoView {
    let details = create_rw_signal(BookingDetails::default());
    let status = create_rw_signal(SubmitStatus::Idle);
    // Captured here because event handlers run without a current owner.
    let owner = Owner::current();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        status.set(SubmitStatus::Submitting);
        let payload = details.get_untracked();

        spawn_local(async move {
            let outcome = submit_booking(&payload).await;
            match &outcome {
                Ok(()) => log!("[BOOKING] Booking accepted"),
                Err(err) => error!("[BOOKING] Failed to submit booking: {}", err),
            }
            with_owner_safe(owner, "booking submit", move || {
                status.set(SubmitStatus::from_outcome(&outcome))
            });
        });
    };

    // One handler for every input: the input's `name` says which field changed.
    let handle_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        match BookingField::from_key(&input.name()) {
            Some(field) => details.update(|d| d.set(field, input.value())),
            None => error!("[BOOKING] Input with unknown name: {}", input.name()),
        }
    };

    let inputs = BookingField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <input
                    type="text"
                    name=field.key()
                    placeholder=field.key()
                    prop:value=move || details.with(|d| d.get(field).to_owned())
                    on:input=handle_change
                    class="w-full border p-2 rounded-md"
                    required=true
                />
            }
        })
        .collect_view();

    view! {
        <form on:submit=handle_submit class="space-y-4 bg-white p-6 rounded-xl shadow-md">
            <h2 class="text-xl font-semibold mb-4">{ "Booking Details" }</h2>
            {inputs}
            <BookingStatus status=status.read_only() />
        </form>
    }
}

/// Submit button plus the success/failure line for a given status.
#[component]
pub fn BookingStatus(#[prop(into)] status: MaybeSignal<SubmitStatus>) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || status.get().is_submitting()
            class="w-full bg-red-500 text-white py-2 rounded-md hover:bg-red-600 transition"
        >
            {move || status.get().button_label()}
        </button>
        {move || status.get().message().map(|(class, text)| view! { <p class=class>{ text }</p> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_maps_to_final_status() {
        assert_eq!(SubmitStatus::from_outcome(&Ok(())), SubmitStatus::Confirmed);
        assert_eq!(
            SubmitStatus::from_outcome(&Err(ClientError::Status(402))),
            SubmitStatus::Failed
        );
        assert_eq!(
            SubmitStatus::from_outcome(&Err(ClientError::Network("offline".into()))),
            SubmitStatus::Failed
        );
    }

    #[test]
    fn test_only_submitting_is_loading() {
        assert!(SubmitStatus::Submitting.is_submitting());
        for status in [SubmitStatus::Idle, SubmitStatus::Confirmed, SubmitStatus::Failed] {
            assert!(!status.is_submitting());
            assert_eq!(status.button_label(), "Confirm & Pay");
        }
        assert_eq!(SubmitStatus::Submitting.button_label(), "Processing...");
    }

    #[test]
    fn test_messages_only_after_completion() {
        assert_eq!(SubmitStatus::Idle.message(), None);
        assert_eq!(SubmitStatus::Submitting.message(), None);
        assert_eq!(SubmitStatus::Confirmed.message().map(|(_, t)| t), Some(SUCCESS_MESSAGE));
        assert_eq!(SubmitStatus::Failed.message().map(|(_, t)| t), Some(FAILURE_MESSAGE));
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::*;
        use leptos::ssr::render_to_string;

        fn render_status(status: SubmitStatus) -> String {
            render_to_string(move || view! { <BookingStatus status=status /> }).to_string()
        }

        #[test]
        fn test_confirmed_shows_success_and_idle_button() {
            let html = render_status(SubmitStatus::Confirmed);
            assert!(html.contains(SUCCESS_MESSAGE));
            assert!(!html.contains(FAILURE_MESSAGE));
            assert!(!html.contains("Processing..."));
            assert!(!html.contains("disabled"));
        }

        #[test]
        fn test_failed_shows_error() {
            let html = render_status(SubmitStatus::Failed);
            assert!(html.contains(FAILURE_MESSAGE));
            assert!(!html.contains(SUCCESS_MESSAGE));
        }

        #[test]
        fn test_submitting_disables_button() {
            let html = render_status(SubmitStatus::Submitting);
            assert!(html.contains("Processing..."));
            assert!(html.contains("disabled"));
            assert!(!html.contains(SUCCESS_MESSAGE));
            assert!(!html.contains(FAILURE_MESSAGE));
        }

        #[test]
        fn test_form_renders_every_field_as_required_input() {
            let html = render_to_string(|| view! { <BookingForm /> }).to_string();

            assert!(html.contains("Booking Details"));
            for field in BookingField::ALL {
                assert!(html.contains(&format!("name=\"{}\"", field.key())));
                assert!(html.contains(&format!("placeholder=\"{}\"", field.key())));
            }
            assert_eq!(html.matches("<input").count(), BookingField::ALL.len());
            assert_eq!(html.matches("required").count(), BookingField::ALL.len());
        }
    }
}
