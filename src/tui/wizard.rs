//! Setup wizard simulating the store-connection and generation pipeline.
//!
//! Four steps: import products, brand brief, output configuration, and
//! review-and-generate. "Scraping" a URL and "generating" content are timed
//! simulations over canned data (see [`crate::sim`]); the wizard owns the
//! pending task state, so leaving the wizard drops any in-flight simulation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

use crate::config::Config;
use crate::data::products::{csv_batch, scrape_pool};
use crate::models::{ExportFormat, Platform, Product};
use crate::sim::{GenerationRun, ProductPool, ScrapeTask};
use crate::tui::Theme;

/// Wizard steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Add products by URL or CSV
    Products,
    /// Brand voice and audience
    BrandBrief,
    /// Platforms and export format
    OutputConfig,
    /// Summary and simulated generation
    Review,
}

impl WizardStep {
    /// Gets the next step in the wizard.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Products => Some(Self::BrandBrief),
            Self::BrandBrief => Some(Self::OutputConfig),
            Self::OutputConfig => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// Gets the previous step in the wizard.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Products => None,
            Self::BrandBrief => Some(Self::Products),
            Self::OutputConfig => Some(Self::BrandBrief),
            Self::Review => Some(Self::OutputConfig),
        }
    }

    /// Gets the step title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Products => "Add Products",
            Self::BrandBrief => "Brand Brief",
            Self::OutputConfig => "Platforms & Output",
            Self::Review => "Review & Generate",
        }
    }

    /// One-based position for the "Step x/4" indicator.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Products => 1,
            Self::BrandBrief => 2,
            Self::OutputConfig => 3,
            Self::Review => 4,
        }
    }
}

/// Which brand brief field is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandField {
    /// Business name (required)
    BusinessName,
    /// Unique selling proposition
    Usp,
    /// Target audience
    Audience,
}

impl BrandField {
    /// The next field in tab order (wraps around).
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::BusinessName => Self::Usp,
            Self::Usp => Self::Audience,
            Self::Audience => Self::BusinessName,
        }
    }
}

/// Setup wizard state.
#[derive(Debug, Clone)]
pub struct SetupWizardState {
    /// Current wizard step
    pub current_step: WizardStep,
    /// Products added this session
    pub products: Vec<Product>,
    /// URL input buffer
    pub url_input: String,
    /// In-flight simulated scrape, if any
    pub scrape: Option<ScrapeTask>,
    pool: ProductPool,
    /// Business name input
    pub business_name: String,
    /// USP input
    pub usp: String,
    /// Audience input
    pub audience: String,
    /// Brand field currently being edited
    pub active_field: BrandField,
    /// Per-platform enabled flags, indexed like [`Platform::ALL`]
    pub platform_enabled: [bool; 4],
    /// Selected export format
    pub format: ExportFormat,
    /// Running generation, if confirmed
    pub generation: Option<GenerationRun>,
    /// Validation or status message for the current step
    pub error_message: Option<String>,
    /// Last action feedback
    pub status_message: String,
    /// Whether generation finished and the wizard is done
    pub is_complete: bool,
    /// Whether the user backed out
    pub cancelled: bool,
}

impl SetupWizardState {
    /// Creates a wizard prefilled from the existing configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut platform_enabled = [false; 4];
        for (i, platform) in Platform::ALL.iter().enumerate() {
            platform_enabled[i] = config.output.platforms.contains(platform);
        }

        Self {
            current_step: WizardStep::Products,
            products: Vec::new(),
            url_input: String::new(),
            scrape: None,
            pool: ProductPool::new(scrape_pool()),
            business_name: config.brand.business_name.clone(),
            usp: config.brand.usp.clone(),
            audience: config.brand.target_audience.clone(),
            active_field: BrandField::BusinessName,
            platform_enabled,
            format: config.output.format,
            generation: None,
            error_message: None,
            status_message: String::new(),
            is_complete: false,
            cancelled: false,
        }
    }

    /// Number of platforms currently enabled.
    #[must_use]
    pub fn enabled_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .iter()
            .zip(self.platform_enabled.iter())
            .filter_map(|(platform, enabled)| enabled.then_some(*platform))
            .collect()
    }

    /// Advances pending simulations. Call once per event-loop tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(scrape) = &self.scrape {
            if scrape.is_done(now) {
                self.scrape = None;
                if let Some(product) = self.pool.take_next() {
                    self.status_message = format!("Imported: {} ({})", product.name, product.sku);
                    self.products.push(product);
                }
                self.url_input.clear();
            }
        }

        if let Some(run) = &mut self.generation {
            if run.poll(now) {
                self.is_complete = true;
            }
        }
    }

    /// Submits the URL field: starts a simulated scrape.
    ///
    /// The URL is only checked for presence; its content is never fetched.
    pub fn submit_url(&mut self, now: Instant) {
        if self.scrape.is_some() {
            return;
        }
        if self.url_input.trim().is_empty() {
            self.error_message = Some("Enter a product URL first".to_string());
            return;
        }
        self.error_message = None;
        self.scrape = Some(ScrapeTask::start(self.url_input.clone(), now));
    }

    /// "Uploads a CSV": unconditionally appends the fixed three-record batch.
    pub fn import_csv(&mut self) {
        let batch = csv_batch();
        self.status_message = format!("CSV import: {} products added", batch.len());
        self.products.extend(batch);
        self.error_message = None;
    }

    /// Tries to advance to the next step, validating the current one.
    pub fn next_step(&mut self) {
        self.error_message = None;

        match self.current_step {
            WizardStep::Products => {
                if self.products.is_empty() {
                    self.error_message = Some("Add at least one product".to_string());
                    return;
                }
                self.current_step = WizardStep::BrandBrief;
            }
            WizardStep::BrandBrief => {
                if self.business_name.trim().is_empty() {
                    self.error_message = Some("Business name cannot be empty".to_string());
                    return;
                }
                self.current_step = WizardStep::OutputConfig;
            }
            WizardStep::OutputConfig => {
                if self.enabled_platforms().is_empty() {
                    self.error_message = Some("Enable at least one platform".to_string());
                    return;
                }
                self.current_step = WizardStep::Review;
            }
            WizardStep::Review => {}
        }
    }

    /// Goes back to the previous step.
    pub fn previous_step(&mut self) {
        self.error_message = None;
        if let Some(prev) = self.current_step.previous() {
            self.current_step = prev;
        }
    }

    /// Starts the scripted generation run.
    pub fn start_generation(&mut self, now: Instant) {
        if self.generation.is_none() {
            self.generation = Some(GenerationRun::start(now));
        }
    }

    /// Writes the wizard's collected inputs back into the configuration.
    pub fn apply_to_config(&self, config: &mut Config) {
        config.brand.business_name = self.business_name.trim().to_string();
        config.brand.usp = self.usp.trim().to_string();
        config.brand.target_audience = self.audience.trim().to_string();
        config.output.platforms = self.enabled_platforms();
        config.output.format = self.format;
    }

    /// Handles a key event. Returns `true` when the wizard should close.
    pub fn handle_input(&mut self, key: KeyEvent, now: Instant) -> bool {
        // The generation run cannot be interrupted; it always completes.
        if self.generation.is_some() {
            return false;
        }

        match key.code {
            KeyCode::Esc => {
                self.cancelled = true;
                return true;
            }
            KeyCode::BackTab => {
                self.previous_step();
                return false;
            }
            _ => {}
        }

        match self.current_step {
            WizardStep::Products => match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.import_csv();
                }
                KeyCode::Enter => {
                    if self.url_input.trim().is_empty() {
                        self.next_step();
                    } else {
                        self.submit_url(now);
                    }
                }
                KeyCode::Backspace if self.scrape.is_none() => {
                    self.url_input.pop();
                }
                KeyCode::Char(c) if self.scrape.is_none() => {
                    self.url_input.push(c);
                }
                _ => {}
            },
            WizardStep::BrandBrief => match key.code {
                KeyCode::Tab => {
                    self.active_field = self.active_field.next();
                }
                KeyCode::Enter => self.next_step(),
                KeyCode::Backspace => {
                    self.active_field_buffer().pop();
                }
                KeyCode::Char(c) => {
                    self.active_field_buffer().push(c);
                }
                _ => {}
            },
            WizardStep::OutputConfig => match key.code {
                KeyCode::Char(c @ '1'..='4') => {
                    let idx = (c as usize) - ('1' as usize);
                    self.platform_enabled[idx] = !self.platform_enabled[idx];
                }
                KeyCode::Char('f') => {
                    self.format = self.format.toggled();
                }
                KeyCode::Enter => self.next_step(),
                _ => {}
            },
            WizardStep::Review => {
                if key.code == KeyCode::Enter {
                    self.start_generation(now);
                }
            }
        }

        false
    }

    /// The input buffer for the active brand field.
    fn active_field_buffer(&mut self) -> &mut String {
        match self.active_field {
            BrandField::BusinessName => &mut self.business_name,
            BrandField::Usp => &mut self.usp,
            BrandField::Audience => &mut self.audience,
        }
    }
}

/// Renders the wizard.
pub fn render(f: &mut Frame, state: &SetupWizardState, theme: &Theme) {
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step header
            Constraint::Min(8),    // Step body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], state, theme);

    match state.current_step {
        WizardStep::Products => render_products_step(f, chunks[1], state, theme),
        WizardStep::BrandBrief => render_brand_step(f, chunks[1], state, theme),
        WizardStep::OutputConfig => render_output_step(f, chunks[1], state, theme),
        WizardStep::Review => render_review_step(f, chunks[1], state, theme),
    }

    render_footer(f, chunks[2], state, theme);
}

fn render_header(f: &mut Frame, area: Rect, state: &SetupWizardState, theme: &Theme) {
    let title = format!(
        " Setup - Step {}/4: {} ",
        state.current_step.position(),
        state.current_step.title()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_products_step(f: &mut Frame, area: Rect, state: &SetupWizardState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let input_label = if state.scrape.is_some() {
        format!("Scraping {} ...", state.url_input)
    } else {
        format!("Product URL: {}_", state.url_input)
    };
    let input = Paragraph::new(input_label)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Import "),
        );
    f.render_widget(input, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();
    for product in &state.products {
        lines.push(Line::from(vec![
            Span::styled("+ ", Style::default().fg(theme.success)),
            Span::styled(
                format!("{} ", product.name),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("{} {} ({})", product.sku, product.price, product.source),
                Style::default().fg(theme.text_muted),
            ),
        ]));
    }
    if state.products.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No products yet. Paste a URL and press Enter, or Ctrl+U for a CSV.",
            Style::default().fg(theme.text_muted),
        )));
    }

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(format!(" Products ({}) ", state.products.len())),
    );
    f.render_widget(list, chunks[1]);
}

fn render_brand_step(f: &mut Frame, area: Rect, state: &SetupWizardState, theme: &Theme) {
    let fields = [
        (BrandField::BusinessName, "Business name", &state.business_name),
        (BrandField::Usp, "USP", &state.usp),
        (BrandField::Audience, "Target audience", &state.audience),
    ];

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (field, label, value) in fields {
        let active = field == state.active_field;
        let marker = if active { "> " } else { "  " };
        let label_style = if active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        let cursor = if active { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.accent)),
            Span::styled(format!("{:<16}", label), label_style),
            Span::styled(format!("{}{}", value, cursor), Style::default().fg(theme.text)),
        ]));
        lines.push(Line::from(""));
    }

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Brand "),
    );
    f.render_widget(body, area);
}

fn render_output_step(f: &mut Frame, area: Rect, state: &SetupWizardState, theme: &Theme) {
    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, platform) in Platform::ALL.iter().enumerate() {
        let enabled = state.platform_enabled[i];
        let (mark, color) = if enabled {
            ("[x]", theme.success)
        } else {
            ("[ ]", theme.text_muted)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", i + 1), Style::default().fg(theme.accent)),
            Span::styled(format!("{} ", mark), Style::default().fg(color)),
            Span::styled(platform.label().to_string(), Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  f ", Style::default().fg(theme.accent)),
        Span::styled("Export format: ", Style::default().fg(theme.text_secondary)),
        Span::styled(
            state.format.slug().to_string(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Output "),
    );
    f.render_widget(body, area);
}

fn render_review_step(f: &mut Frame, area: Rect, state: &SetupWizardState, theme: &Theme) {
    if let Some(run) = &state.generation {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(2)])
            .split(area);

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Generating "),
            )
            .gauge_style(Style::default().fg(theme.accent))
            .percent(run.percent());
        f.render_widget(gauge, chunks[0]);

        let message = Paragraph::new(Line::from(vec![
            Span::styled(run.message(), Style::default().fg(theme.text)),
            Span::styled(
                format!("  {}%", run.percent()),
                Style::default().fg(theme.text_muted),
            ),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(message, chunks[1]);
        return;
    }

    let platforms = state
        .enabled_platforms()
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ");

    let lines = vec![
        Line::from(""),
        summary_line("Products", state.products.len().to_string(), theme),
        summary_line("Business", state.business_name.clone(), theme),
        summary_line("Platforms", platforms, theme),
        summary_line("Format", state.format.slug().to_string(), theme),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Enter to generate ad copy and UGC scripts.",
            Style::default().fg(theme.text_secondary),
        )),
    ];

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Review "),
    );
    f.render_widget(body, area);
}

fn summary_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<12}", label),
            Style::default().fg(theme.text_secondary),
        ),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}

fn render_footer(f: &mut Frame, area: Rect, state: &SetupWizardState, theme: &Theme) {
    let line = if let Some(error) = &state.error_message {
        Line::from(vec![
            Span::styled("ERROR: ", Style::default().fg(theme.error)),
            Span::styled(error.clone(), Style::default().fg(theme.text)),
        ])
    } else if !state.status_message.is_empty() {
        Line::from(Span::styled(
            state.status_message.clone(),
            Style::default().fg(theme.success),
        ))
    } else {
        Line::from(Span::styled(
            "Enter: continue | Shift+Tab: back | Esc: cancel",
            Style::default().fg(theme.text_muted),
        ))
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SCRAPE_DELAY;
    use std::time::Duration;

    fn wizard() -> SetupWizardState {
        SetupWizardState::new(&Config::new())
    }

    fn add_url_product(state: &mut SetupWizardState, now: Instant) -> Instant {
        state.url_input = "https://shop.example.com/products/item".to_string();
        state.submit_url(now);
        let done = now + SCRAPE_DELAY;
        state.tick(done);
        done
    }

    #[test]
    fn test_add_by_url_appends_one_product_per_invocation() {
        let mut state = wizard();
        let mut now = Instant::now();
        let k = scrape_pool().len();

        for n in 0..=k {
            now = add_url_product(&mut state, now);
            assert_eq!(state.products.len(), n + 1);
            // Round-robin: the Nth addition draws pool entry N mod K.
            assert_eq!(state.products[n].sku, scrape_pool()[n % k].sku);
        }
        // The (K+1)-th addition repeated the first pool entry.
        assert_eq!(state.products[k].sku, state.products[0].sku);
    }

    #[test]
    fn test_submit_empty_url_is_rejected() {
        let mut state = wizard();
        state.submit_url(Instant::now());
        assert!(state.scrape.is_none());
        assert!(state.error_message.is_some());
        assert!(state.products.is_empty());
    }

    #[test]
    fn test_scrape_does_not_complete_early() {
        let mut state = wizard();
        let now = Instant::now();
        state.url_input = "https://shop.example.com/p/1".to_string();
        state.submit_url(now);
        state.tick(now + Duration::from_millis(100));
        assert!(state.products.is_empty());
        assert!(state.scrape.is_some());
    }

    #[test]
    fn test_csv_import_always_appends_three() {
        let mut state = wizard();
        state.import_csv();
        assert_eq!(state.products.len(), 3);
        state.import_csv();
        assert_eq!(state.products.len(), 6);
    }

    #[test]
    fn test_step_validation_blocks_advancement() {
        let mut state = wizard();
        // No products yet: stay on the first step.
        state.next_step();
        assert_eq!(state.current_step, WizardStep::Products);
        assert!(state.error_message.is_some());

        state.import_csv();
        state.next_step();
        assert_eq!(state.current_step, WizardStep::BrandBrief);

        // Empty business name refused.
        state.next_step();
        assert_eq!(state.current_step, WizardStep::BrandBrief);

        state.business_name = "Hearth & Haven".to_string();
        state.next_step();
        assert_eq!(state.current_step, WizardStep::OutputConfig);

        // All platforms disabled refused.
        state.platform_enabled = [false; 4];
        state.next_step();
        assert_eq!(state.current_step, WizardStep::OutputConfig);

        state.platform_enabled[0] = true;
        state.next_step();
        assert_eq!(state.current_step, WizardStep::Review);
        assert!(state.current_step.next().is_none());
    }

    #[test]
    fn test_generation_completes_and_finishes_wizard() {
        let mut state = wizard();
        let mut now = Instant::now();
        state.start_generation(now);

        let mut last_percent = 0;
        for _ in 0..crate::sim::GENERATION_SCHEDULE.len() + 2 {
            now += crate::sim::GENERATION_STEP;
            state.tick(now);
            let run = state.generation.as_ref().unwrap();
            assert!(run.percent() >= last_percent);
            last_percent = run.percent();
        }

        assert_eq!(last_percent, 100);
        assert!(state.is_complete);
    }

    #[test]
    fn test_input_ignored_while_generating() {
        let mut state = wizard();
        let now = Instant::now();
        state.current_step = WizardStep::Review;
        state.start_generation(now);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!state.handle_input(esc, now));
        assert!(!state.cancelled);
    }

    #[test]
    fn test_apply_to_config_writes_brand_and_output() {
        let mut state = wizard();
        state.business_name = "  Hearth & Haven ".to_string();
        state.usp = "Quiet quality for loud homes".to_string();
        state.audience = "Design-minded renters".to_string();
        state.platform_enabled = [true, false, true, false];
        state.format = ExportFormat::Json;

        let mut config = Config::new();
        state.apply_to_config(&mut config);

        assert_eq!(config.brand.business_name, "Hearth & Haven");
        assert_eq!(
            config.output.platforms,
            vec![Platform::Meta, Platform::Tiktok]
        );
        assert_eq!(config.output.format, ExportFormat::Json);
        assert!(config.is_configured());
    }
}
