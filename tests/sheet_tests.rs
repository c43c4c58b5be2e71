//! # Label Sheet Tests
//!
//! End-to-end checks from catalog mutations to composed pages. A counting
//! sink stands in for the PDF backend so page contents can be inspected.

use placard::catalog::{CardFields, Catalog, StoreChange};
use placard::logos::{self, LogoImage};
use placard::sheet::{self, DrawingSink, LabelStyle, Placement, Rect, TextBlock};
use pretty_assertions::assert_eq;

/// One card's border, tagged with the page it was drawn on.
#[derive(Debug, Clone, PartialEq)]
struct DrawnCard {
    page: usize,
    rect: Rect,
    first_line: String,
}

/// Sink that tracks pages and the cards drawn on each.
#[derive(Default)]
struct PageSink {
    pages_begun: usize,
    pages_ended: usize,
    open: bool,
    cards: Vec<DrawnCard>,
}

impl DrawingSink for PageSink {
    fn draw_rect(&mut self, rect: Rect, _line_width: f32) {
        assert!(self.open, "drawing outside a page");
        self.cards.push(DrawnCard {
            page: self.pages_begun - 1,
            rect,
            first_line: String::new(),
        });
    }

    fn draw_image(&mut self, _image: &LogoImage, _rect: Rect) {
        assert!(self.open, "drawing outside a page");
    }

    fn draw_wrapped_text(&mut self, _x: f32, _top: f32, _max_width: f32, text: &TextBlock) -> f32 {
        if let Some(card) = self.cards.last_mut() {
            card.first_line = text.lines[0].clone();
        }
        text.lines.len() as f32 * text.leading
    }

    fn begin_page(&mut self) {
        assert!(!self.open, "page opened twice");
        self.open = true;
        self.pages_begun += 1;
    }

    fn end_page(&mut self) {
        assert!(self.open, "closing a page that is not open");
        self.open = false;
        self.pages_ended += 1;
    }

    fn finalize(self) -> placard::error::Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

fn titled(title: &str) -> CardFields {
    CardFields {
        title: title.to_string(),
        ..Default::default()
    }
}

fn compose(catalog: &Catalog) -> PageSink {
    let mut sink = PageSink::default();
    let snapshot = catalog.snapshot();
    sheet::compose_into(
        snapshot.records(),
        &catalog.logo(),
        &LabelStyle::default(),
        &mut sink,
    );
    assert!(!sink.open, "a page was left open");
    sink
}

/// Page-local slot of a drawn card, from its border position.
fn slot(card: &DrawnCard) -> usize {
    let target = (0..8)
        .map(Placement::at)
        .find(|p| (p.x - card.rect.x).abs() < 1e-3 && (p.y - card.rect.y).abs() < 1e-3)
        .expect("card border is not on the grid");
    target.position()
}

fn catalog_with(n: usize) -> Catalog {
    let mut catalog = Catalog::new(logos::default_logo());
    for i in 0..n {
        catalog.add(titled(&format!("Work {i}")), 1).unwrap();
    }
    catalog
}

#[test]
fn test_ten_cards_make_two_pages() {
    let sink = compose(&catalog_with(10));

    assert_eq!(sink.pages_begun, 2);
    assert_eq!(sink.pages_ended, 2);

    let page0: Vec<usize> = sink.cards.iter().filter(|c| c.page == 0).map(slot).collect();
    let page1: Vec<usize> = sink.cards.iter().filter(|c| c.page == 1).map(slot).collect();
    assert_eq!(page0, (0..8).collect::<Vec<_>>());
    assert_eq!(page1, vec![0, 1]);
}

#[test]
fn test_eight_cards_make_exactly_one_page() {
    let sink = compose(&catalog_with(8));
    assert_eq!(sink.pages_begun, 1);
    assert_eq!(sink.pages_ended, 1);
    assert_eq!(sink.cards.len(), 8);
}

#[test]
fn test_empty_catalog_has_no_pages() {
    let sink = compose(&catalog_with(0));
    assert_eq!(sink.pages_begun, 0);
    assert!(sink.cards.is_empty());
}

#[test]
fn test_delete_repacks_without_gap() {
    let mut catalog = catalog_with(10);
    let victim = catalog.list()[2].id.clone();
    catalog.delete(&victim).unwrap();

    let sink = compose(&catalog);
    let titles: Vec<&str> = sink
        .cards
        .iter()
        .map(|c| c.first_line.rsplit(": ").next().unwrap())
        .collect();

    assert_eq!(
        titles,
        vec!["Work 0", "Work 1", "Work 3", "Work 4", "Work 5", "Work 6", "Work 7", "Work 8", "Work 9"]
    );
    // Work 3 moved into slot 2; Work 9 is alone on page 1.
    assert_eq!(slot(&sink.cards[2]), 2);
    assert_eq!(sink.cards[8].page, 1);
    assert_eq!(slot(&sink.cards[8]), 0);
}

#[test]
fn test_import_adds_exactly_m_records() {
    let mut catalog = catalog_with(3);
    let before = catalog.list();

    let file = "# gallery export\ntitle,author,height,width,medium,date\n\
                A,Lin,10,20,ink,2024-5-6\n\
                B,Chen,,,,\n\
                C,Wu,5,5,clay,not-a-date\n";
    let change = catalog.import(file.as_bytes()).unwrap();

    let StoreChange::Imported { ids } = change else {
        panic!("expected Imported");
    };
    assert_eq!(ids.len(), 3);

    let after = catalog.list();
    assert_eq!(after.len(), before.len() + 3);
    assert_eq!(&after[..3], &before[..]);
    assert_eq!(after[3].fields.date, "2024/05/06");
    assert_eq!(after[4].fields.height, "");
    assert_eq!(after[5].fields.date, "not-a-date");
}

#[test]
fn test_malformed_import_changes_nothing() {
    let mut catalog = catalog_with(2);
    let before = catalog.list();

    let result = catalog.import(b"title,author\nA,B\nC,D,E,F\n");

    assert!(matches!(result, Err(placard::LabelError::Parse(_))));
    assert_eq!(catalog.list(), before);
}

#[test]
fn test_export_snapshot_unaffected_by_later_edits() {
    let mut catalog = catalog_with(9);
    let snapshot = catalog.snapshot();

    for record in catalog.list() {
        catalog.delete(&record.id).unwrap();
    }
    assert!(catalog.list().is_empty());

    let mut sink = PageSink::default();
    sheet::compose_into(
        snapshot.records(),
        &catalog.logo(),
        &LabelStyle::default(),
        &mut sink,
    );
    assert_eq!(sink.cards.len(), 9);
    assert_eq!(sink.pages_ended, 2);
}

#[test]
fn test_pdf_export() {
    let catalog = catalog_with(10);
    let bytes = catalog.export().unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Count 2"));
}
