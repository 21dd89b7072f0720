use anyhow::Result;
use chrono::{Timelike, Utc};

use crate::analytics::{self, Period, PersonalRecord};
use crate::config::Config;
use crate::models::{WeightUnit, WorkoutDay, WorkoutPlan, WorkoutSession};
use crate::storage::Storage;

/// Application state for the TUI dashboard
pub struct App {
    /// Should the application quit?
    pub should_quit: bool,
    /// Currently selected panel
    pub selected_panel: Panel,
    /// Selected index in the current panel
    pub selected_index: usize,
    /// Show help overlay
    pub show_help: bool,
    /// The training program
    pub plan: WorkoutPlan,
    /// Today's scheduled day
    pub today: Option<WorkoutDay>,
    /// This week's summary data
    pub week: WeekSummary,
    /// Recent sessions
    pub recent_sessions: Vec<WorkoutSession>,
    /// Personal records
    pub records: Vec<PersonalRecord>,
    /// Preferred weight unit for display
    pub unit: WeightUnit,
    /// Display name from the profile
    pub user_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    TodayWorkout,
    WeekSummary,
    RecentSessions,
    Records,
}

#[derive(Debug, Clone, Default)]
pub struct WeekSummary {
    pub sessions: u32,
    pub volume_lbs: f64,
    /// Fraction of the weekly session target reached
    pub progress: f32,
    pub streak_days: u32,
    pub sessions_by_day: [u32; 7], // Monday to Sunday
}

impl App {
    /// Create new app instance and load data
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let storage = Storage::init()?;
        let plan = WorkoutPlan::default_program();

        let mut app = Self {
            should_quit: false,
            selected_panel: Panel::TodayWorkout,
            selected_index: 0,
            show_help: false,
            today: plan.today().cloned(),
            plan,
            week: WeekSummary::default(),
            recent_sessions: Vec::new(),
            records: Vec::new(),
            unit: config.weight_unit(),
            user_name: config.profile.name.clone(),
        };
        app.load(&storage, &config)?;

        Ok(app)
    }

    fn load(&mut self, storage: &Storage, config: &Config) -> Result<()> {
        let now = Utc::now();
        let sessions = storage.list_sessions()?;

        let frequency = analytics::workout_frequency(&sessions, Period::Week, now);
        let points = analytics::volume_by_date(&sessions, Period::Week, now);

        self.week = WeekSummary {
            sessions: frequency.iter().sum(),
            volume_lbs: points.iter().map(|p| p.volume_lbs).sum(),
            progress: analytics::weekly_progress(
                &sessions,
                config.workout.sessions_per_week,
                now,
            ),
            streak_days: analytics::workout_streak(&sessions),
            sessions_by_day: frequency,
        };

        self.records = analytics::personal_records(&sessions, config.workout.pr_min_reps);
        self.recent_sessions = sessions.into_iter().take(10).collect();

        Ok(())
    }

    /// Refresh data from storage
    pub fn refresh(&mut self) -> Result<()> {
        let config = Config::load()?;
        let storage = Storage::init()?;

        self.unit = config.weight_unit();
        self.user_name = config.profile.name.clone();
        self.today = self.plan.today().cloned();
        self.load(&storage, &config)
    }

    /// Time-of-day greeting for the status bar
    pub fn greeting(&self) -> &'static str {
        match chrono::Local::now().hour() {
            0..=11 => "Good Morning",
            12..=16 => "Good Afternoon",
            17..=20 => "Good Evening",
            _ => "Good Night",
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode) -> Result<()> {
        use crossterm::event::KeyCode;

        // Help overlay takes precedence
        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return Ok(());
        }

        match key {
            // Quit
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }

            // Help
            KeyCode::Char('?') => {
                self.show_help = true;
            }

            // Refresh
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.refresh()?;
            }

            // Tab to switch panels
            KeyCode::Tab => {
                self.next_panel();
            }

            KeyCode::BackTab => {
                self.prev_panel();
            }

            // Navigation within panel
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection_up();
            }

            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection_down();
            }

            KeyCode::Left | KeyCode::Char('h') => {
                self.prev_panel();
            }

            KeyCode::Right | KeyCode::Char('l') => {
                self.next_panel();
            }

            _ => {}
        }

        Ok(())
    }

    /// Move to next panel
    fn next_panel(&mut self) {
        self.selected_panel = match self.selected_panel {
            Panel::TodayWorkout => Panel::WeekSummary,
            Panel::WeekSummary => Panel::RecentSessions,
            Panel::RecentSessions => Panel::Records,
            Panel::Records => Panel::TodayWorkout,
        };
        self.selected_index = 0;
    }

    /// Move to previous panel
    fn prev_panel(&mut self) {
        self.selected_panel = match self.selected_panel {
            Panel::TodayWorkout => Panel::Records,
            Panel::WeekSummary => Panel::TodayWorkout,
            Panel::RecentSessions => Panel::WeekSummary,
            Panel::Records => Panel::RecentSessions,
        };
        self.selected_index = 0;
    }

    /// Move selection up within current panel
    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down within current panel
    fn move_selection_down(&mut self) {
        let max_index = match self.selected_panel {
            Panel::TodayWorkout => self
                .today
                .as_ref()
                .map(|d| d.exercises.len().saturating_sub(1))
                .unwrap_or(0),
            Panel::RecentSessions => self.recent_sessions.len().saturating_sub(1),
            Panel::Records => self.records.len().saturating_sub(1),
            _ => 0,
        };

        if self.selected_index < max_index {
            self.selected_index += 1;
        }
    }
}
