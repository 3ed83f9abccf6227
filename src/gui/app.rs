use super::{Config, Playback, Viewport};
use crate::{Board, Cell, PATTERNS};
use anyhow::{Context as _, Result};
use eframe::egui::{CentralPanel, Context, Frame, Key, Rect, TopBottomPanel, Vec2};
use egui_file::FileDialog;
use std::{path::Path, time::Instant};

pub struct App {
    pub(super) board: Board,                    // The simulated field.
    pub(super) playback: Playback,              // Run/stop state and tick schedule.
    pub(super) viewport: Viewport,              // Mapping between canvas pixels and cells.
    pub(super) generation: u64,                 // Generations since the field was last replaced.
    pub(super) last_update_duration: f64,       // Duration of the last board update in seconds.
    pub(super) hovered: Option<Cell>,           // Cell under the pointer, highlighted.
    pub(super) selected_pattern: usize,         // Index into `PATTERNS`.
    pub(super) file_dialog: Option<FileDialog>, // Open while an RLE file is being picked.
    pub(super) status: String,                  // Last message shown under the controls.
    pub(super) life_rect: Option<Rect>,         // Part of the window displaying the field.
}

impl App {
    pub fn new(board: Board) -> Self {
        let mut app = Self {
            board: Board::new(),
            playback: Playback::default(),
            viewport: Viewport::default(),
            generation: 0,
            last_update_duration: 0.,
            hovered: None,
            selected_pattern: 0,
            file_dialog: None,
            status: String::new(),
            life_rect: None,
        };
        app.replace_board(board);
        app
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.playback.is_running()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn start_stop(&mut self) {
        let running = self.playback.toggle(Instant::now());
        log::info!(
            "simulation {} at generation {}",
            if running { "started" } else { "stopped" },
            self.generation
        );
    }

    /// Single step; ignored while the simulation is running.
    pub fn next_frame(&mut self) {
        if self.playback.is_running() {
            return;
        }
        log::debug!("before step: {}", self.board);
        self.update_engine();
        log::debug!("after step: {}", self.board);
    }

    pub fn clear(&mut self) {
        self.board.clear_board();
        self.generation = 0;
        log::info!("field cleared");
    }

    pub fn toggle(&mut self, cell: Cell) {
        let alive = self.board.toggle_cell(cell);
        log::debug!("{cell} is now {}", if alive { "alive" } else { "dead" });
    }

    pub fn randomize(&mut self) {
        let (min, max) = self.visible_cells();
        let center = Cell::new((min.x + max.x).div_euclid(2), (min.y + max.y).div_euclid(2));
        let half = (Config::RANDOM_SIDE / 2) as i64;
        let board = Board::random(
            center.offset(-half, -half),
            Config::RANDOM_SIDE,
            Config::RANDOM_SIDE,
            Config::RANDOM_FILL_RATE,
            None,
        );
        self.playback.stop();
        self.board = board;
        self.generation = 0;
        log::info!("random soup with {} cells", self.board.population());
    }

    /// Stamps the selected built-in pattern in the middle of the view.
    pub fn place_selected_pattern(&mut self) {
        let pattern = &PATTERNS[self.selected_pattern];
        match pattern.cells() {
            Ok(cells) => {
                let (min, max) = self.visible_cells();
                let origin =
                    Cell::new((min.x + max.x).div_euclid(2), (min.y + max.y).div_euclid(2));
                self.board.place(cells, origin);
                self.status = format!("placed {} at {origin}", pattern.name);
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let data =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let board = Board::from_rle(&data)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        self.replace_board(board);
        self.status = format!("loaded {}", path.display());
        log::info!(
            "loaded {} with {} cells",
            path.display(),
            self.board.population()
        );
        Ok(())
    }

    pub fn fit_view(&mut self) {
        if let Some(bounds) = self.board.bounds() {
            self.viewport.fit(bounds, self.canvas_size());
        }
    }

    fn replace_board(&mut self, board: Board) {
        self.playback.stop();
        self.board = board;
        self.generation = 0;
        self.fit_view();
    }

    fn report_error(&mut self, e: anyhow::Error) {
        log::error!("{e:#}");
        self.status = format!("{e:#}");
    }

    fn canvas_size(&self) -> Vec2 {
        self.life_rect
            .map_or(Vec2::from(Config::WINDOW_SIZE), |rect| rect.size())
    }

    fn visible_cells(&self) -> (Cell, Cell) {
        self.viewport.visible_cells(self.canvas_size())
    }

    fn update_engine(&mut self) {
        let timer = Instant::now();
        self.board.update();
        self.last_update_duration = timer.elapsed().as_secs_f64();
        self.generation += 1;
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (step, start_stop) = ctx.input(|input| {
            (input.key_pressed(Key::Space), input.key_pressed(Key::E))
        });
        if step {
            self.next_frame();
        }
        if start_stop {
            self.start_stop();
        }
    }

    pub(super) fn open_file_dialog(&mut self) {
        let mut dialog = FileDialog::open_file(None);
        dialog.open();
        self.file_dialog = Some(dialog);
    }

    fn show_file_dialog(&mut self, ctx: &Context) {
        let Some(dialog) = self.file_dialog.as_mut() else {
            return;
        };
        if dialog.show(ctx).selected() {
            let path = dialog.path().map(Path::to_path_buf);
            self.file_dialog = None;
            if let Some(path) = path {
                if let Err(e) = self.load_file(&path) {
                    self.report_error(e);
                }
            }
        } else if !dialog.visible() {
            self.file_dialog = None;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        if self.playback.poll(Instant::now()) {
            self.update_engine();
        }

        TopBottomPanel::top("controls").show(ctx, |ui| self.draw_controls(ui));
        CentralPanel::default()
            .frame(Frame::none().fill(Config::DEAD_COLOR))
            .show(ctx, |ui| self.draw_field(ui));
        self.show_file_dialog(ctx);

        if let Some(wait) = self.playback.time_until_next(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Board {
        [(1, 0), (1, 1), (1, 2)].map(Cell::from).into_iter().collect()
    }

    #[test]
    fn test_step_counts_generations() {
        let mut app = App::new(blinker());
        app.next_frame();
        app.next_frame();
        assert_eq!(app.generation(), 2);
        assert_eq!(app.board(), &blinker());

        app.clear();
        assert_eq!(app.generation(), 0);
        assert!(app.board().is_empty());
    }

    #[test]
    fn test_step_is_disabled_while_running() {
        let mut app = App::new(blinker());
        app.start_stop();
        assert!(app.is_running());
        app.next_frame();
        assert_eq!(app.generation(), 0);
        app.start_stop();
        assert!(!app.is_running());
    }

    #[test]
    fn test_toggle_and_place() {
        let mut app = App::new(Board::new());
        app.toggle(Cell::new(3, 3));
        assert!(app.board().is_alive(Cell::new(3, 3)));
        app.toggle(Cell::new(3, 3));
        assert!(app.board().is_empty());

        app.place_selected_pattern();
        assert_eq!(app.board().population(), PATTERNS[0].cells().unwrap().len());
    }

    #[test]
    fn test_load_missing_file_keeps_board() {
        let mut app = App::new(blinker());
        let result = app.load_file(Path::new("/nonexistent/pattern.rle"));
        assert!(result.is_err());
        assert_eq!(app.board(), &blinker());
    }

    #[test]
    fn test_load_file_replaces_board() {
        let path = std::env::temp_dir().join(format!("sparse_life_{}.rle", std::process::id()));
        std::fs::write(&path, "x = 2, y = 2\n2o$2o!").unwrap();
        let mut app = App::new(blinker());
        app.next_frame();
        app.load_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(app.generation(), 0);
        assert_eq!(app.board().population(), 4);
        assert!(app.status().starts_with("loaded"));
    }
}
