use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The trimmed text of every element matching `selector`.
#[track_caller]
pub(crate) fn text_of(html: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).expect("Invalid selector");

    html.select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_owned())
        .collect()
}

/// The values of the selected options in the year picker.
#[track_caller]
pub(crate) fn selected_values(html: &Html) -> Vec<String> {
    let selector = Selector::parse("select[name='years'] option[selected]").unwrap();

    html.select(&selector)
        .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
        .collect()
}
