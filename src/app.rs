/// Main application entry point for the rental front end.
/// Routes the property page (with its reviews) and the booking page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::{booking_form::BookingForm, review_section::ReviewSection};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/homestay.css"/>
        <Title text="Homestay"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/properties/:id" view=PropertyPage/>
                    <Route path="/booking" view=BookingPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn PropertyPage() -> impl IntoView {
    let params = use_params_map();
    // Signal so the review section refetches when navigating between properties.
    let property_id = Signal::derive(move || {
        params.with(|p| p.get("id").cloned().unwrap_or_default())
    });

    view! {
        <div>
            <h1>{ "Property" }</h1>
            <ReviewSection property_id=property_id />
        </div>
    }
}

#[component]
fn BookingPage() -> impl IntoView {
    view! {
        <div>
            <BookingForm />
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <h1>{ "Page not found" }</h1> }
}
