//! Catalog search flows as the CLI browsing modes drive them.

use application::catalog_service::CatalogService;
use domain::catalog::{BOOKS, COUNSELLORS, VIDEOS};
use domain::message::Message;
use presentation::render;

#[test]
fn browsing_without_a_query_shows_everything() {
    let service = CatalogService::new();
    assert_eq!(service.search_books("").len(), BOOKS.len());
    assert_eq!(service.search_videos("", None).len(), VIDEOS.len());
    assert_eq!(service.search_counsellors("").len(), COUNSELLORS.len());
}

#[test]
fn search_narrows_case_insensitively() {
    let service = CatalogService::new();

    let books = service.search_books("JAMES");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Atomic Habits");

    let videos = service.search_videos("calm campus", None);
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].title, "5-Minute Breathing Exercise");

    let counsellors = service.search_counsellors("academic");
    assert_eq!(counsellors.len(), 1);
    assert_eq!(counsellors[0].name, "Dr. David Kim");
}

#[test]
fn category_chip_behaviour() {
    let service = CatalogService::new();
    assert_eq!(
        service.search_videos("", Some("All")).len(),
        VIDEOS.len()
    );
    let stress = service.search_videos("", Some("Stress Relief"));
    assert_eq!(stress.len(), 1);
    assert_eq!(stress[0].creator, "Dr. Alex Thompson");
}

#[test]
fn listing_helpers_are_stable() {
    assert_eq!(render::stars(4.9), "★★★★☆ 4.9");
    let greeting = Message::assistant("Hello!");
    assert_eq!(render::format_message(&greeting), "WellSpring: Hello!");
}
