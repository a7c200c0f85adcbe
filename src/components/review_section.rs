/// Reviews for a single property.
/// Fetches once on mount (and again if the property changes) and renders one of
/// loading, error, empty or the list of reviews.
use leptos::logging::error;
use leptos::*;
use crate::client::{fetch_reviews, ClientError};
use crate::models::review::Review;

pub const LOADING_MESSAGE: &str = "Loading reviews...";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load reviews. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No reviews available for this property yet.";

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewsState {
    Loading,
    Loaded(Vec<Review>),
    Empty,
    Failed,
}

impl ReviewsState {
    /// Maps the resource value (`None` while the request is in flight) to a render state.
    pub fn from_fetch(fetched: Option<Result<Vec<Review>, ClientError>>) -> Self {
        match fetched {
            None => ReviewsState::Loading,
            Some(Ok(reviews)) if reviews.is_empty() => ReviewsState::Empty,
            Some(Ok(reviews)) => ReviewsState::Loaded(reviews),
            Some(Err(_)) => ReviewsState::Failed,
        }
    }
}

#[component]
pub fn ReviewSection(#[prop(into)] property_id: MaybeSignal<String>) -> impl IntoView {
    // Client-only: the server renders the loading state and the browser does the fetch.
    let reviews = create_local_resource(
        move || property_id.get(),
        |property_id| async move {
            let result = fetch_reviews(&property_id).await;
            if let Err(err) = &result {
                error!("[REVIEWS] Error fetching reviews for {}: {}", property_id, err);
            }
            result
        },
    );

    move || view! { <ReviewsView state=ReviewsState::from_fetch(reviews.get()) /> }
}

#[component]
pub fn ReviewsView(state: ReviewsState) -> impl IntoView {
    match state {
        ReviewsState::Loading => view! { <p>{ LOADING_MESSAGE }</p> }.into_view(),
        ReviewsState::Failed => view! {
            <p class="error" style="color: red">{ LOAD_ERROR_MESSAGE }</p>
        }
        .into_view(),
        ReviewsState::Empty => view! { <p>{ EMPTY_MESSAGE }</p> }.into_view(),
        ReviewsState::Loaded(reviews) => view! {
            <div class="reviews">
                <h3>{ "Reviews" }</h3>
                <For
                    each=move || reviews.clone()
                    key=|review: &Review| review.id.clone()
                    children=|review: Review| view! { <ReviewCard review=review /> }
                />
            </div>
        }
        .into_view(),
    }
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let author = format!("{}:", review.author_name());
    let rating = review.rating_label();
    let Review { id, comment, .. } = review;

    view! {
        <div class="review-card" data-review-id=id>
            <p><strong>{ author }</strong></p>
            <p>{ comment }</p>
            {rating.map(|label| view! { <p class="review-rating">{ label }</p> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::ReviewUser;

    fn review(id: &str, rating: Option<f64>, user: Option<&str>) -> Review {
        Review {
            id: id.into(),
            comment: format!("Comment {}", id),
            rating,
            user: user.map(|name| ReviewUser { name: name.into() }),
        }
    }

    #[test]
    fn test_state_while_loading() {
        assert_eq!(ReviewsState::from_fetch(None), ReviewsState::Loading);
    }

    #[test]
    fn test_state_for_empty_list() {
        assert_eq!(ReviewsState::from_fetch(Some(Ok(vec![]))), ReviewsState::Empty);
    }

    #[test]
    fn test_state_for_loaded_list() {
        let reviews = vec![review("a", Some(5.0), None), review("b", None, None)];
        assert_eq!(
            ReviewsState::from_fetch(Some(Ok(reviews.clone()))),
            ReviewsState::Loaded(reviews)
        );
    }

    #[test]
    fn test_every_error_kind_collapses_to_failed() {
        for err in [
            ClientError::Network("offline".into()),
            ClientError::Status(500),
            ClientError::Decode("not json".into()),
        ] {
            assert_eq!(ReviewsState::from_fetch(Some(Err(err))), ReviewsState::Failed);
        }
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::*;
        use leptos::ssr::render_to_string;

        fn render(state: ReviewsState) -> String {
            render_to_string(move || view! { <ReviewsView state=state /> }).to_string()
        }

        #[test]
        fn test_renders_one_block_per_review() {
            let html = render(ReviewsState::Loaded(vec![
                review("a", Some(4.0), Some("Amina")),
                review("b", None, None),
                review("c", Some(2.5), Some("")),
            ]));

            assert_eq!(html.matches("class=\"review-card\"").count(), 3);
            assert!(html.contains("Reviews"));
            assert!(html.contains("Amina:"));
            assert_eq!(html.matches("Anonymous:").count(), 2);
            assert!(html.contains("Comment b"));
            // SSR escapes `/` in text nodes
            assert!(html.contains("⭐ 4&#x2F;5"));
            assert!(html.contains("⭐ 2.5&#x2F;5"));
            assert_eq!(html.matches("class=\"review-rating\"").count(), 2);
        }

        #[test]
        fn test_renders_empty_message() {
            let html = render(ReviewsState::Empty);
            assert!(html.contains(EMPTY_MESSAGE));
            assert!(!html.contains("review-card"));
        }

        #[test]
        fn test_renders_error_message() {
            let html = render(ReviewsState::Failed);
            assert!(html.contains(LOAD_ERROR_MESSAGE));
            assert!(!html.contains("review-card"));
        }

        #[test]
        fn test_renders_loading_message() {
            assert!(render(ReviewsState::Loading).contains(LOADING_MESSAGE));
        }
    }
}
