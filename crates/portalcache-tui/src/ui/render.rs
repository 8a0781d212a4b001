use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use portalcache_core::Character;

use crate::app::{App, Route};

use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Page tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    match app.route {
        Route::Home => render_home(frame, app, chunks[2]),
        Route::Characters => render_characters(frame, app, chunks[2]),
    }
    render_status_bar(frame, app, chunks[3]);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = "  portalcache";
    let hint = "[q] Quit";

    let line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title.len() as u16 + hint.len() as u16 + 4) as usize,
        )),
        Span::styled(hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::border_style());

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = [
        ("[1] Home", app.route == Route::Home),
        ("[2] Characters", app.route == Route::Characters),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (label, selected)) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        spans.push(Span::styled(*label, styles::tab_style(*selected)));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::border_style());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let cached = app.store.total_characters();
    let page = app.store.current_page();
    let pages = app.store.total_pages();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to portalcache",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from("  A cached browser for the Rick and Morty character catalog."),
        Line::from("  The last page you viewed is kept on disk and shown even"),
        Line::from("  before the network answers."),
        Line::from(""),
    ];

    if cached > 0 {
        lines.push(Line::from(Span::styled(
            format!("  {} characters cached (page {} of {})", cached, page, pages),
            styles::highlight_style(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Nothing cached yet",
            styles::muted_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press [2] to browse characters",
        styles::muted_style(),
    )));

    let block = Block::default().borders(Borders::NONE);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_characters(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_character_list(frame, app, chunks[0]);
    render_character_detail(frame, app, chunks[1]);
}

fn render_character_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .store
        .characters()
        .iter()
        .map(|c| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4}  ", c.id), styles::muted_style()),
                Span::styled(c.name.clone(), styles::list_item_style()),
            ]))
        })
        .collect();

    let title = format!(
        " Page {} of {} ",
        app.store.current_page(),
        app.store.total_pages()
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::border_style())
                .title(title),
        )
        .highlight_style(styles::selected_style());

    let mut state = ListState::default();
    if app.store.total_characters() > 0 {
        state.select(Some(app.selection));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_character_detail(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style())
        .title(" Details ");

    let lines = match app.selected_character() {
        Some(c) => detail_lines(c),
        None => vec![Line::from(Span::styled(
            "No character selected",
            styles::muted_style(),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn detail_lines(c: &Character) -> Vec<Line<'_>> {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), styles::muted_style()),
            Span::raw(value),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(c.name.clone(), styles::title_style())),
        Line::from(""),
        field("Status", c.status.clone()),
        field("Species", c.species.clone()),
    ];

    if !c.kind.is_empty() {
        lines.push(field("Type", c.kind.clone()));
    }

    lines.push(field("Gender", c.gender.clone()));
    lines.push(field("Origin", c.origin.name.clone()));
    lines.push(field("Location", c.location.name.clone()));
    lines.push(field("Episodes", c.episode.len().to_string()));

    lines
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left = if app.loading {
        Span::styled(
            app.status_message
                .clone()
                .unwrap_or_else(|| "Loading...".to_string()),
            styles::highlight_style(),
        )
    } else if let Some(error) = &app.error {
        Span::styled(format!("Error: {}", error), styles::error_style())
    } else if let Some(message) = &app.status_message {
        Span::styled(message.clone(), styles::highlight_style())
    } else {
        Span::styled(
            format!("{} characters", app.store.total_characters()),
            styles::muted_style(),
        )
    };

    let hints = "[n]ext [p]rev [r]efresh [x] clear [q]uit";

    let line = Line::from(vec![
        Span::raw(" "),
        left,
        Span::raw(" "),
        Span::styled(hints, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(styles::border_style());

    frame.render_widget(Paragraph::new(line).block(block), area);
}
