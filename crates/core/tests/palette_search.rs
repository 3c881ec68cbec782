use notepalette_core::config::PaletteConfig;
use notepalette_core::highlight::{self, MatchRange, Segment};
use notepalette_core::notes::{self, Field};
use notepalette_core::search::{FuzzySearcher, NoteMatcher, SearchOptions};
use notepalette_core::state::{PaletteState, Selection};

fn searcher() -> FuzzySearcher {
    FuzzySearcher::new(notes::all(), SearchOptions::from(&PaletteConfig::default()))
}

#[test]
fn searching_chicken_highlights_it_in_the_grocery_list() {
    let hits = searcher().search("chicken");
    let grocery = hits
        .iter()
        .find(|h| h.note.title == "Grocery List")
        .expect("grocery list in results");

    let content = grocery.segments(Field::Content);
    let marked: Vec<&str> = content
        .iter()
        .filter(|s| s.is_highlighted())
        .map(|s| s.text)
        .collect();
    assert_eq!(marked, vec!["Chicken"]);
    assert_eq!(
        highlight::render_marked(&content),
        "Eggs, Milk, Bread, Butter, Cheese, Apples, Bananas, Oranges, [[Chicken]], Broccoli."
    );
}

#[test]
fn every_hit_round_trips_through_the_highlighter() {
    for term in ["chicken", "'the", "quotes", "mon | fri", "^b", "day$", "'e"] {
        for hit in searcher().search(term) {
            for field in Field::ALL {
                let joined: String = hit.segments(field).iter().map(|s| s.text).collect();
                assert_eq!(joined, hit.note.field(field), "term {term:?}");
            }
        }
    }
}

#[test]
fn property_cases_from_the_highlighter_contract() {
    assert_eq!(
        highlight::highlight("abcdef", &[MatchRange::new(0, 1), MatchRange::new(2, 3)]),
        vec![Segment::highlighted("ab"), Segment::highlighted("cd"), Segment::plain("ef")]
    );
    assert_eq!(
        highlight::highlight("hello", &[MatchRange::new(0, 4)]),
        vec![Segment::highlighted("hello")]
    );
    assert_eq!(
        highlight::highlight("hello", &[MatchRange::new(3, 4)]),
        vec![Segment::plain("hel"), Segment::highlighted("lo")]
    );
}

#[test]
fn palette_session_from_open_to_selection() {
    let mut palette = PaletteState::new(searcher());
    assert!(palette.is_open());

    for c in "'recipe".chars() {
        palette.push_char(c);
    }
    let titles: Vec<&str> = palette.results().iter().map(|h| h.note.title).collect();
    assert_eq!(titles, vec!["Recipe: Spaghetti Carbonara", "Favorite Recipes"]);

    palette.move_down();
    match palette.select() {
        Some(Selection::Unlinked(note)) => assert_eq!(note.title, "Favorite Recipes"),
        None => panic!("expected a selection"),
    }

    palette.toggle();
    assert!(!palette.is_open());
    assert!(palette.results().is_empty());
}
