//! Browse screen — metrics row, category tabs, filter controls, and the
//! product card grid.
//!
//! Layout:
//! ┌─ Catalog ────────────────────────────────────────────────────────────┐
//! │ Total Products 20 │ Categories 4 │ Average Price $82.43              │
//! │ [All]  electronics  jewelery  men's clothing  women's clothing       │
//! │ Rating ≥ 0.0   Price $0–$1000   Sort: Price: Low to High             │
//! │ ┌─ $109.95 ─────────┐ ┌─ $22.30 ──────────┐ ┌─ $168.00 ─────────┐   │
//! │ │ title / excerpt   │ │ …                 │ │ …                 │   │
//! │ └───────────────────┘ └───────────────────┘ └───────────────────┘   │
//! │ hints                                                                │
//! └──────────────────────────────────────────────────────────────────────┘

use std::cell::Cell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tokio::sync::mpsc::UnboundedSender;

use storelens_core::{
    CatalogQuery, CategorySelection, FilterCriteria, PRICE_CEILING, Product, SortMode, summarize,
};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::{rating_meter, sub_tabs, text_fmt};

/// Shown in place of the grid when every product was filtered away.
const EMPTY_MESSAGE: &str = "No products found matching your search criteria.";

/// Step applied by the rating hotkeys.
const RATING_STEP: f64 = 0.1;
/// Step applied by the price hotkeys.
const PRICE_STEP: f64 = 50.0;

const CARD_WIDTH: u16 = 38;
const CARD_HEIGHT: u16 = 8;

pub struct BrowseScreen {
    focused: bool,
    action_tx: Option<UnboundedSender<Action>>,
    /// Immutable catalog snapshot from the startup fetch.
    products: Vec<Product>,
    categories: Vec<String>,
    criteria: FilterCriteria,
    sort: Option<SortMode>,
    /// Index into the cached view.
    selected: usize,
    detail_open: bool,
    cached_view: Vec<Product>,
    /// Columns in the last rendered grid — written during render, read
    /// by the key handler for vertical movement.
    grid_cols: Cell<usize>,
    /// First visible card row, kept in range during render.
    scroll_row: Cell<usize>,
}

impl BrowseScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            action_tx: None,
            products: Vec::new(),
            categories: Vec::new(),
            criteria: FilterCriteria::default(),
            // Parity with the storefront UI: price ascending preselected.
            sort: Some(SortMode::PriceLowHigh),
            selected: 0,
            detail_open: false,
            cached_view: Vec::new(),
            grid_cols: Cell::new(1),
            scroll_row: Cell::new(0),
        }
    }

    /// Re-run the filter-then-sort query over the snapshot.
    fn recompute_view(&mut self) {
        let query = CatalogQuery {
            filter: self.criteria.clone(),
            sort: self.sort,
        };
        self.cached_view = query.execute(&self.products);
        if self.selected >= self.cached_view.len() {
            self.selected = self.cached_view.len().saturating_sub(1);
        }
        self.scroll_row.set(0);
    }

    fn view(&self) -> &[Product] {
        &self.cached_view
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::as_conversions)]
    fn move_selection(&mut self, delta: isize) {
        let len = self.view().len();
        if len == 0 {
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        self.selected = next as usize;
    }

    /// Tab strip labels: `All` plus every fetched category.
    fn tab_labels(&self) -> Vec<&str> {
        let mut labels = vec!["All"];
        labels.extend(self.categories.iter().map(String::as_str));
        labels
    }

    fn category_index(&self) -> usize {
        match &self.criteria.category {
            CategorySelection::All => 0,
            CategorySelection::Only(name) => self
                .categories
                .iter()
                .position(|c| c == name)
                .map_or(0, |i| i + 1),
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::as_conversions)]
    fn cycle_category(&mut self, delta: isize) {
        let count = self.categories.len() as isize + 1;
        let next = (self.category_index() as isize + delta).rem_euclid(count) as usize;
        self.criteria.category = if next == 0 {
            CategorySelection::All
        } else {
            CategorySelection::Only(self.categories[next - 1].clone())
        };
        self.selected = 0;
        self.recompute_view();
    }

    fn cycle_sort(&mut self) {
        self.sort = match self.sort {
            Some(SortMode::PriceLowHigh) => Some(SortMode::PriceHighLow),
            Some(SortMode::PriceHighLow) => Some(SortMode::RatingHighLow),
            Some(SortMode::RatingHighLow) | None => Some(SortMode::PriceLowHigh),
        };
        self.recompute_view();
    }

    fn adjust_min_rating(&mut self, delta: f64) {
        // Rounding keeps the 0.1 steps from accumulating float drift.
        let next = ((self.criteria.min_rating + delta) * 10.0).round() / 10.0;
        self.criteria.min_rating = next.clamp(0.0, 5.0);
        self.recompute_view();
    }

    fn adjust_max_price(&mut self, delta: f64) {
        let next = self.criteria.max_price + delta;
        self.criteria.max_price = next.clamp(self.criteria.min_price, PRICE_CEILING);
        self.recompute_view();
    }

    fn adjust_min_price(&mut self, delta: f64) {
        let next = self.criteria.min_price + delta;
        self.criteria.min_price = next.clamp(0.0, self.criteria.max_price);
        self.recompute_view();
    }

    fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.selected = 0;
        self.recompute_view();
    }

    // ── Render helpers ───────────────────────────────────────────────

    fn render_metrics(&self, frame: &mut Frame, area: Rect) {
        let summary = summarize(self.view(), &self.categories);

        let mut spans = vec![
            Span::styled(" Total Products ", theme::metric_label()),
            Span::styled(summary.product_count.to_string(), theme::metric_value()),
            Span::styled("  │  Categories ", theme::metric_label()),
            Span::styled(summary.category_count.to_string(), theme::metric_value()),
        ];
        // Hidden entirely when the view is empty.
        if let Some(avg) = summary.average_price {
            spans.push(Span::styled("  │  Average Price ", theme::metric_label()));
            spans.push(Span::styled(text_fmt::price(avg), theme::metric_value()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let sort_label = self
            .sort
            .map_or_else(|| "fetch order".to_owned(), |m| m.to_string());
        let line = Line::from(vec![
            Span::styled(" Rating ≥ ", theme::metric_label()),
            Span::styled(
                format!("{:.1}", self.criteria.min_rating),
                theme::metric_value(),
            ),
            Span::styled("   Price ", theme::metric_label()),
            Span::styled(
                format!(
                    "{}–{}",
                    text_fmt::price(self.criteria.min_price),
                    text_fmt::price(self.criteria.max_price)
                ),
                theme::metric_value(),
            ),
            Span::styled("   Sort: ", theme::metric_label()),
            Span::styled(sort_label, Style::default().fg(theme::ELECTRIC_PURPLE)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    #[allow(clippy::as_conversions)]
    fn render_grid(&self, frame: &mut Frame, area: Rect) {
        if self.view().is_empty() {
            let message = Paragraph::new(Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(theme::ELECTRIC_YELLOW),
            )))
            .centered();
            let y = area.y + area.height / 2;
            frame.render_widget(message, Rect::new(area.x, y, area.width, 1));
            self.grid_cols.set(1);
            return;
        }

        let cols = usize::from((area.width / CARD_WIDTH).max(1));
        self.grid_cols.set(cols);

        let total_rows = self.view().len().div_ceil(cols);
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

        // Keep the selected card in the visible window.
        let selected_row = self.selected / cols;
        let mut first_row = self.scroll_row.get().min(total_rows.saturating_sub(1));
        if selected_row < first_row {
            first_row = selected_row;
        } else if selected_row >= first_row + visible_rows {
            first_row = selected_row + 1 - visible_rows;
        }
        self.scroll_row.set(first_row);

        for row in first_row..total_rows.min(first_row + visible_rows) {
            for col in 0..cols {
                let idx = row * cols + col;
                let Some(product) = self.view().get(idx) else {
                    break;
                };
                let x_off = (col as u16) * CARD_WIDTH;
                let y_off = ((row - first_row) as u16) * CARD_HEIGHT;
                let card_area = Rect::new(
                    area.x + x_off,
                    area.y + y_off,
                    CARD_WIDTH.min(area.width.saturating_sub(x_off)),
                    CARD_HEIGHT.min(area.height.saturating_sub(y_off)),
                );
                self.render_card(frame, card_area, product, idx == self.selected);
            }
        }
    }

    #[allow(clippy::unused_self)]
    fn render_card(&self, frame: &mut Frame, area: Rect, product: &Product, selected: bool) {
        let block = Block::default()
            .title(format!(" {} ", text_fmt::price(product.price)))
            .title_style(theme::price_tag())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if selected {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(product.title.clone(), theme::card_title())),
            Line::from(Span::styled(
                product.category.clone(),
                Style::default().fg(theme::CORAL),
            )),
            Line::from(Span::styled(
                text_fmt::excerpt(&product.description),
                theme::card_body(),
            )),
        ];
        let body_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body_area);

        let badge = Line::from(vec![
            rating_meter::stars_span(product.rating.rate),
            Span::styled(
                format!(
                    " {}",
                    text_fmt::rating_badge(product.rating.rate, product.rating.count)
                ),
                theme::card_body(),
            ),
        ]);
        let badge_area = Rect::new(
            inner.x,
            inner.y + inner.height.saturating_sub(1),
            inner.width,
            1,
        );
        frame.render_widget(Paragraph::new(badge), badge_area);
    }

    #[allow(clippy::unused_self)]
    fn render_detail(&self, frame: &mut Frame, area: Rect, product: &Product) {
        let width = 72u16.min(area.width.saturating_sub(4));
        let height = 18u16.min(area.height.saturating_sub(2));
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(area.x + x, area.y + y, width, height);

        // Clear the background
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            popup_area,
        );

        let block = Block::default()
            .title(format!(" {} ", product.title))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let label = theme::metric_label();
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Category  ", label),
                Span::styled(product.category.clone(), Style::default().fg(theme::CORAL)),
            ]),
            Line::from(vec![
                Span::styled("  Price     ", label),
                Span::styled(text_fmt::price(product.price), theme::price_tag()),
            ]),
            Line::from(vec![
                Span::styled("  Rating    ", label),
                rating_meter::stars_span(product.rating.rate),
                Span::styled(
                    format!(
                        " {}",
                        text_fmt::rating_badge(product.rating.rate, product.rating.count)
                    ),
                    theme::card_body(),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Image     ", label),
                Span::styled(product.image.clone(), theme::key_hint()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", product.description),
                theme::card_body(),
            )),
        ];

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            layout[0],
        );

        let hints = Line::from(vec![
            Span::styled("  Esc ", theme::key_hint_key()),
            Span::styled("close", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[1]);
    }
}

impl Component for BrowseScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    #[allow(clippy::cast_possible_wrap, clippy::as_conversions)]
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.detail_open {
            return match key.code {
                KeyCode::Esc => {
                    self.detail_open = false;
                    Ok(Some(Action::CloseDetail))
                }
                _ => Ok(None),
            };
        }

        match key.code {
            // ── Grid navigation ──────────────────────────────────────
            KeyCode::Char('h') | KeyCode::Left => {
                self.move_selection(-1);
                Ok(None)
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.move_selection(1);
                Ok(None)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(self.grid_cols.get() as isize);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-(self.grid_cols.get() as isize));
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.selected = 0;
                Ok(None)
            }
            KeyCode::Char('G') => {
                self.selected = self.view().len().saturating_sub(1);
                Ok(None)
            }

            // ── Category tabs ────────────────────────────────────────
            KeyCode::Tab => {
                self.cycle_category(1);
                Ok(None)
            }
            KeyCode::BackTab => {
                self.cycle_category(-1);
                Ok(None)
            }

            // ── Sort and filter controls ─────────────────────────────
            KeyCode::Char('s') => {
                self.cycle_sort();
                Ok(None)
            }
            KeyCode::Char('+' | '=') => {
                self.adjust_min_rating(RATING_STEP);
                Ok(None)
            }
            KeyCode::Char('-') => {
                self.adjust_min_rating(-RATING_STEP);
                Ok(None)
            }
            KeyCode::Char(']') => {
                self.adjust_max_price(PRICE_STEP);
                Ok(None)
            }
            KeyCode::Char('[') => {
                self.adjust_max_price(-PRICE_STEP);
                Ok(None)
            }
            KeyCode::Char('}') => {
                self.adjust_min_price(PRICE_STEP);
                Ok(None)
            }
            KeyCode::Char('{') => {
                self.adjust_min_price(-PRICE_STEP);
                Ok(None)
            }
            KeyCode::Char('c') => {
                self.reset_filters();
                Ok(None)
            }

            // ── Detail popup ─────────────────────────────────────────
            KeyCode::Enter => {
                if let Some(product_id) = self.view().get(self.selected).map(|p| p.id) {
                    self.detail_open = true;
                    Ok(Some(Action::OpenDetail(product_id)))
                } else {
                    Ok(None)
                }
            }

            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CatalogLoaded {
                products,
                categories,
            } => {
                self.products.clone_from(products);
                self.categories.clone_from(categories);
                self.selected = 0;
                self.recompute_view();
            }
            Action::SearchInput(query) => {
                self.criteria.search.clone_from(query);
                self.selected = 0;
                self.recompute_view();
            }
            Action::CloseSearch => {
                self.criteria.search.clear();
                self.recompute_view();
            }
            Action::CloseDetail => {
                self.detail_open = false;
            }
            _ => {}
        }
        Ok(None)
    }

    #[allow(clippy::similar_names)]
    fn render(&self, frame: &mut Frame, area: Rect) {
        let shown = self.view().len();
        let total = self.products.len();
        let title = if self.criteria.search.is_empty() {
            format!(" Catalog ({shown}/{total}) ")
        } else {
            format!(" Catalog ({shown}/{total}) [\"{}\"] ", self.criteria.search)
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(1), // metrics row
            Constraint::Length(1), // category tabs
            Constraint::Length(1), // filter controls
            Constraint::Min(1),    // card grid
            Constraint::Length(1), // hints
        ])
        .split(inner);

        self.render_metrics(frame, layout[0]);

        let labels = self.tab_labels();
        let tabs = sub_tabs::render_sub_tabs(&labels, self.category_index());
        frame.render_widget(Paragraph::new(tabs), layout[1]);

        self.render_controls(frame, layout[2]);
        self.render_grid(frame, layout[3]);

        let hints = Line::from(vec![
            Span::styled("  Tab ", theme::key_hint_key()),
            Span::styled("category  ", theme::key_hint()),
            Span::styled("s ", theme::key_hint_key()),
            Span::styled("sort  ", theme::key_hint()),
            Span::styled("+/- ", theme::key_hint_key()),
            Span::styled("rating  ", theme::key_hint()),
            Span::styled("[/] ", theme::key_hint_key()),
            Span::styled("max price  ", theme::key_hint()),
            Span::styled("{/} ", theme::key_hint_key()),
            Span::styled("min price  ", theme::key_hint()),
            Span::styled("c ", theme::key_hint_key()),
            Span::styled("clear", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[4]);

        if self.detail_open {
            if let Some(product) = self.view().get(self.selected) {
                self.render_detail(frame, area, product);
            }
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use pretty_assertions::assert_eq;
    use storelens_core::Rating;

    use super::*;

    fn product(id: u64, title: &str, category: &str, price: f64, rate: f64) -> Product {
        Product {
            id,
            title: title.to_owned(),
            price,
            description: format!("{title} fixture"),
            category: category.to_owned(),
            image: format!("https://img.example/{id}.jpg"),
            rating: Rating { rate, count: 25 },
        }
    }

    fn loaded_screen() -> BrowseScreen {
        let mut screen = BrowseScreen::new();
        screen
            .update(&Action::CatalogLoaded {
                products: vec![
                    product(1, "Fjallraven Backpack", "men's clothing", 109.95, 3.9),
                    product(2, "Mens Casual T-Shirt", "men's clothing", 22.3, 4.1),
                    product(3, "Gold Chain Bracelet", "jewelery", 168.0, 4.6),
                ],
                categories: vec![
                    "electronics".to_owned(),
                    "jewelery".to_owned(),
                    "men's clothing".to_owned(),
                ],
            })
            .unwrap();
        screen
    }

    fn ids(screen: &BrowseScreen) -> Vec<u64> {
        screen.view().iter().map(|p| p.id).collect()
    }

    #[test]
    fn catalog_load_applies_the_default_price_sort() {
        let screen = loaded_screen();
        assert_eq!(ids(&screen), vec![2, 1, 3]);
    }

    #[test]
    fn search_input_narrows_the_view() {
        let mut screen = loaded_screen();
        screen
            .update(&Action::SearchInput("gold".to_owned()))
            .unwrap();
        assert_eq!(ids(&screen), vec![3]);

        screen.update(&Action::CloseSearch).unwrap();
        assert_eq!(screen.view().len(), 3);
    }

    #[test]
    fn tab_cycles_through_all_plus_every_category() {
        let mut screen = loaded_screen();
        assert_eq!(screen.category_index(), 0);

        screen.cycle_category(1);
        assert_eq!(
            screen.criteria.category,
            CategorySelection::Only("electronics".to_owned())
        );
        assert!(screen.view().is_empty());

        // Wraps back around to All.
        screen.cycle_category(3);
        assert_eq!(screen.criteria.category, CategorySelection::All);
        assert_eq!(screen.view().len(), 3);
    }

    #[test]
    fn sort_cycle_walks_the_three_modes() {
        let mut screen = loaded_screen();
        screen.cycle_sort();
        assert_eq!(ids(&screen), vec![3, 1, 2]);
        screen.cycle_sort();
        assert_eq!(ids(&screen), vec![3, 2, 1]);
        screen.cycle_sort();
        assert_eq!(ids(&screen), vec![2, 1, 3]);
    }

    #[test]
    fn rating_steps_stay_on_tenths_and_filter_inclusively() {
        let mut screen = loaded_screen();
        for _ in 0..41 {
            screen.adjust_min_rating(RATING_STEP);
        }
        assert_eq!(screen.criteria.min_rating, 4.1);
        assert_eq!(ids(&screen), vec![2, 3]);

        screen.adjust_min_rating(RATING_STEP * 20.0);
        assert_eq!(screen.criteria.min_rating, 5.0);
    }

    #[test]
    fn price_bounds_clamp_against_each_other() {
        let mut screen = loaded_screen();
        screen.adjust_max_price(-PRICE_STEP * 30.0);
        assert_eq!(screen.criteria.max_price, screen.criteria.min_price);
        assert!(screen.view().is_empty());

        screen.reset_filters();
        assert_eq!(screen.criteria.max_price, PRICE_CEILING);
        assert_eq!(screen.view().len(), 3);
    }

    #[test]
    fn selection_clamps_when_the_view_shrinks() {
        let mut screen = loaded_screen();
        screen.selected = 2;
        screen
            .update(&Action::SearchInput("bracelet".to_owned()))
            .unwrap();
        assert_eq!(screen.selected, 0);
    }
}
