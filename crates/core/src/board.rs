//! Board module - the complete game state
//!
//! This module ties together the locked grid, the falling piece, the look-ahead source,
//! scoring and gravity. It enforces every legality rule and drives the
//! lock → clear → spawn → game-over sequence.
//!
//! Every mutator is total: an illegal move or rotation leaves the board unchanged, and once the
//! game is over nothing but inspection has any effect.

use tracing::{debug, info, warn};

use crate::gravity::{GravityConfig, GravityScheduler, GravityTicket, TickOutcome};
use crate::grid::LockedCells;
use crate::piece::Piece;
use crate::rng::NextPieceSource;
use crate::scoring::{drop_score, level_for_lines, line_clear_score};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, Pos, BOARD_HEIGHT};

/// One row down: the only move whose failure locks the piece.
pub const DOWN: Pos = (0, 1);

/// What happened when the last piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// Points awarded by the hard drop that caused this lock (0 for gravity/soft locks).
    pub drop_score: u32,
    pub level_up: bool,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Board {
    grid: LockedCells,
    current: Piece,
    source: NextPieceSource,
    gravity: GravityScheduler,
    /// Last lock event (consumed by the driver).
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    level: u32,
    over: bool,
}

impl Board {
    /// Create a new game with the given RNG seed and default gravity
    pub fn new(seed: u64) -> Self {
        Self::with_source(NextPieceSource::new(seed), GravityConfig::default())
    }

    /// Create a new game drawing pieces from `source`
    pub fn with_source(source: NextPieceSource, gravity: GravityConfig) -> Self {
        Self::with_grid(LockedCells::new(), source, gravity)
    }

    /// Create a game on a pre-filled grid.
    ///
    /// The first piece is spawned immediately; if it overlaps `grid` the game starts over.
    /// Full rows in `grid` stay until the next lock clears them. They count towards `lines`, but
    /// a lock that clears more than four rows at once earns no line score.
    pub fn with_grid(
        grid: LockedCells,
        mut source: NextPieceSource,
        gravity: GravityConfig,
    ) -> Self {
        let current = source.get_piece();
        let over = grid.overlaps(&current.occupying());
        let level = level_for_lines(0);

        let mut gravity = GravityScheduler::new(gravity);
        gravity.schedule(level);

        Self {
            grid,
            current,
            source,
            gravity,
            last_event: None,
            score: 0,
            lines: 0,
            level,
            over,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Locked cells
    pub fn grid(&self) -> &LockedCells {
        &self.grid
    }

    /// The falling piece
    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// The look-ahead piece
    pub fn next(&self) -> &Piece {
        self.source.peek()
    }

    /// Take the most recently scheduled gravity ticket.
    ///
    /// A ticket is scheduled when the board is created and again on every level increase.
    /// The driver should arm each ticket it takes.
    pub fn take_scheduled(&mut self) -> Option<GravityTicket> {
        self.gravity.take_pending()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Try to move the current piece by `delta`.
    ///
    /// A legal move is applied, scoring one point when `award_point` is set (player soft drop).
    /// An illegal *downward* move locks the piece instead. Any other illegal move is ignored.
    /// Returns whether the board changed.
    pub fn try_move(&mut self, delta: Pos, award_point: bool) -> bool {
        if self.over {
            return false;
        }

        let fits = self
            .current
            .test_move(delta)
            .is_some_and(|cells| self.grid.fits(&cells));
        if fits {
            self.current.confirm_move(delta);
            if award_point {
                self.score = self.score.saturating_add(drop_score(1));
            }
            true
        } else if delta == DOWN {
            self.lock_current(0);
            true
        } else {
            false
        }
    }

    /// Try to rotate the current piece one step. No wall kicks: a blocked rotation is ignored.
    pub fn rotate(&mut self) -> bool {
        if self.over {
            return false;
        }

        if self.grid.fits(&self.current.test_rotate()) {
            self.current.confirm_rotate();
            true
        } else {
            false
        }
    }

    /// Drop the current piece as far as it goes, score one point per row and lock it.
    pub fn hard_drop(&mut self) -> bool {
        if self.over {
            return false;
        }

        let rows = self.drop_distance();
        self.current.confirm_move((0, rows as i8));
        let points = drop_score(u32::from(rows));
        self.score = self.score.saturating_add(points);
        self.lock_current(points);
        true
    }

    /// Apply a player action. Returns whether the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move((-1, 0), false),
            GameAction::MoveRight => self.try_move((1, 0), false),
            GameAction::SoftDrop => self.try_move(DOWN, true),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    /// Fire a gravity ticket.
    ///
    /// A ticket scheduled under an earlier level is superseded: it changes nothing and must not
    /// be re-armed. A current ticket moves the piece one row down without scoring (locking it
    /// if blocked).
    pub fn tick(&mut self, ticket: GravityTicket) -> TickOutcome {
        if self.over || !ticket.is_current_for(self.level) {
            debug!(
                ticket_level = ticket.level(),
                level = self.level,
                "gravity ticket superseded"
            );
            return TickOutcome::Superseded;
        }

        self.try_move(DOWN, false);

        if self.over || !ticket.is_current_for(self.level) {
            TickOutcome::Superseded
        } else {
            TickOutcome::Rearm
        }
    }

    /// How many rows the current piece can fall before it is blocked
    pub fn drop_distance(&self) -> u8 {
        if self.over {
            return 0;
        }

        let mut rows: u8 = 0;
        while rows < BOARD_HEIGHT
            && self
                .current
                .test_move((0, rows as i8 + 1))
                .is_some_and(|cells| self.grid.fits(&cells))
        {
            rows += 1;
        }
        rows
    }

    /// Read-only copy of everything a renderer needs
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        for ((x, y), kind) in self.grid.iter() {
            out.grid[y as usize][x as usize] = Some(kind);
        }
        out.current = PieceSnapshot::from(&self.current);
        out.ghost_drop = self.drop_distance();
        out.next = PieceSnapshot::from(self.source.peek());
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.game_over = self.over;
    }

    /// Lock the current piece, clear rows, update counters and spawn the next piece.
    fn lock_current(&mut self, drop_points: u32) {
        let kind = self.current.kind();
        for pos in self.current.occupying() {
            self.grid.insert(pos, kind);
        }

        let cleared = self.grid.clear_full_rows();
        let rows = cleared.len();

        let mut line_points = 0;
        let mut level_up = false;
        if rows > 0 {
            // Scored at the level the rows were cleared on.
            line_points = line_clear_score(rows, self.level);
            if line_points == 0 {
                // Only a pre-filled grid can hold more than four full rows.
                warn!(rows, "no line score for this many rows");
            }
            self.score = self.score.saturating_add(line_points);
            self.lines = self.lines.saturating_add(rows as u32);

            let level = level_for_lines(self.lines);
            if level > self.level {
                self.level = level;
                level_up = true;
                let ticket = self.gravity.schedule(level);
                info!(
                    level,
                    interval_ms = ticket.interval().as_millis() as u64,
                    "level up"
                );
            }

            info!(
                rows = ?cleared.as_slice(),
                points = line_points,
                lines = self.lines,
                "rows cleared"
            );
        }

        self.current = self.source.get_piece();
        if self.grid.overlaps(&self.current.occupying()) {
            self.over = true;
            info!(score = self.score, lines = self.lines, level = self.level, "game over");
        }

        debug!(kind = kind.as_str(), next = ?self.current.kind(), "piece locked");

        self.last_event = Some(LockEvent {
            lines_cleared: rows as u32,
            line_clear_score: line_points,
            drop_score: drop_points,
            level_up,
            game_over: self.over,
        });
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_source(NextPieceSource::default(), GravityConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, BOARD_WIDTH};

    fn board_with(current: PieceKind, next: PieceKind) -> Board {
        let mut board = Board::with_source(
            NextPieceSource::with_next(current, 1),
            GravityConfig::default(),
        );
        board.source = NextPieceSource::with_next(next, 2);
        board
    }

    /// Fill row `y` except the columns in `gaps`.
    fn fill_row_except(board: &mut Board, y: i8, gaps: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&x) {
                board.grid.insert((x, y), PieceKind::L);
            }
        }
    }

    fn assert_invariants(board: &Board) {
        assert_eq!(board.level, board.lines / 10 + 1);
        if !board.over {
            assert!(!board.grid.overlaps(&board.current.occupying()));
        }
    }

    #[test]
    fn test_new_board() {
        let board = Board::new(12345);
        assert_eq!(board.score(), 0);
        assert_eq!(board.lines(), 0);
        assert_eq!(board.level(), 1);
        assert!(!board.is_over());
        assert!(board.grid().is_empty());
        assert_eq!(board.current().shift(), (4, 0));
        assert_invariants(&board);
    }

    #[test]
    fn test_initial_ticket_is_scheduled() {
        let mut board = Board::new(1);
        let ticket = board.take_scheduled().unwrap();
        assert_eq!(ticket.level(), 1);
        assert_eq!(board.take_scheduled(), None);
    }

    #[test]
    fn test_move_sideways() {
        let mut board = board_with(PieceKind::T, PieceKind::O);
        assert!(board.try_move((1, 0), false));
        assert_eq!(board.current.shift(), (5, 0));
        assert!(board.try_move((-1, 0), false));
        assert_eq!(board.current.shift(), (4, 0));
        assert_eq!(board.score, 0);
    }

    #[test]
    fn test_move_into_wall_is_rejected() {
        let mut board = board_with(PieceKind::T, PieceKind::O);
        // T spans columns shift-1..=shift+1, so it can move left 3 times from x=4.
        for _ in 0..3 {
            assert!(board.try_move((-1, 0), false));
        }
        let before = board.current;
        assert!(!board.try_move((-1, 0), false));
        assert_eq!(board.current, before);
        assert!(board.grid.is_empty());
    }

    #[test]
    fn test_move_into_locked_cell_is_rejected() {
        let mut board = board_with(PieceKind::O, PieceKind::O);
        board.grid.insert((6, 0), PieceKind::I);
        let before = board.current;
        assert!(!board.try_move((1, 0), false));
        assert_eq!(board.current, before);
    }

    #[test]
    fn test_move_up_is_rejected_not_locked() {
        let mut board = board_with(PieceKind::O, PieceKind::O);
        assert!(!board.try_move((0, -1), false));
        assert!(board.grid.is_empty());
        assert!(board.take_last_event().is_none());
    }

    #[test]
    fn test_huge_delta_is_rejected() {
        let mut board = board_with(PieceKind::T, PieceKind::O);
        let before = board.current;
        assert!(!board.try_move((127, 0), false));
        assert!(!board.try_move((i8::MIN, i8::MIN), true));
        assert!(!board.try_move((0, i8::MAX), false));
        assert_eq!(board.current, before);
        assert_eq!(board.score, 0);
        assert!(board.grid.is_empty());
        assert!(board.take_last_event().is_none());
    }

    #[test]
    fn test_soft_drop_scores_one_point() {
        let mut board = board_with(PieceKind::O, PieceKind::O);
        assert!(board.apply_action(GameAction::SoftDrop));
        assert_eq!(board.score, 1);
        assert_eq!(board.current.shift(), (4, 1));
    }

    #[test]
    fn test_blocked_down_move_locks() {
        let mut board = board_with(PieceKind::O, PieceKind::T);
        // O occupies rows 0-1; it can fall 16 rows.
        for _ in 0..16 {
            assert!(board.try_move(DOWN, false));
        }
        assert!(board.grid.is_empty());

        assert!(board.try_move(DOWN, false));
        assert_eq!(board.grid.len(), 4);
        assert_eq!(board.grid.get((4, 17)), Some(PieceKind::O));
        assert_eq!(board.grid.get((5, 16)), Some(PieceKind::O));
        assert_eq!(board.current.kind(), PieceKind::T);
        assert_eq!(board.score, 0);
        assert_invariants(&board);
    }

    #[test]
    fn test_rotate_blocked_at_top() {
        // Vertical I reaches row -1, so it cannot rotate at spawn.
        let mut board = board_with(PieceKind::I, PieceKind::O);
        let before = board.current;
        assert!(!board.rotate());
        assert_eq!(board.current, before);

        assert!(board.try_move(DOWN, false));
        assert!(board.rotate());
        assert_eq!(board.current.occupying(), [(4, 0), (4, 1), (4, 2), (4, 3)]);
    }

    #[test]
    fn test_rotate_blocked_by_locked_cell() {
        let mut board = board_with(PieceKind::T, PieceKind::O);
        board.try_move(DOWN, false);
        // Pivot T at shift (4,1) would occupy (4,0).
        board.grid.insert((4, 0), PieceKind::Z);
        let target = board.current.test_rotate();
        assert!(target.contains(&(4, 0)));
        let before = board.current;
        assert!(!board.rotate());
        assert_eq!(board.current, before);
    }

    #[test]
    fn test_hard_drop_scores_rows() {
        let mut board = board_with(PieceKind::O, PieceKind::T);
        assert!(board.hard_drop());
        assert_eq!(board.score, 16);
        assert_eq!(board.grid.get((4, 17)), Some(PieceKind::O));
        let event = board.take_last_event().unwrap();
        assert_eq!(event.drop_score, 16);
        assert_eq!(event.lines_cleared, 0);
    }

    #[test]
    fn test_hard_drop_onto_stack() {
        let mut board = board_with(PieceKind::O, PieceKind::T);
        board.grid.insert((4, 10), PieceKind::S);
        assert_eq!(board.drop_distance(), 8);
        board.hard_drop();
        assert_eq!(board.score, 8);
        assert_eq!(board.grid.get((4, 9)), Some(PieceKind::O));
        assert_eq!(board.grid.get((4, 8)), Some(PieceKind::O));
    }

    #[test]
    fn test_single_line_clear() {
        let mut board = board_with(PieceKind::O, PieceKind::T);
        fill_row_except(&mut board, 17, &[4, 5]);
        fill_row_except(&mut board, 16, &[0, 4, 5]);

        board.hard_drop();
        assert_eq!(board.lines, 1);
        // 16 drop points + 40 * level 1
        assert_eq!(board.score, 16 + 40);
        // Row 16 (with its remaining O cells) dropped into row 17.
        assert_eq!(board.grid.get((0, 17)), None);
        assert_eq!(board.grid.get((4, 17)), Some(PieceKind::O));
        assert_eq!(board.grid.get((1, 17)), Some(PieceKind::L));
        assert!(board.grid.row(16).iter().all(|c| c.is_none()));
        assert_invariants(&board);
    }

    #[test]
    fn test_two_lines_at_level_three() {
        let mut board = board_with(PieceKind::O, PieceKind::T);
        board.lines = 20;
        board.level = 3;
        fill_row_except(&mut board, 17, &[4, 5]);
        fill_row_except(&mut board, 16, &[4, 5]);

        board.hard_drop();
        assert_eq!(board.lines, 22);
        assert_eq!(board.score, 16 + 3 * 100);
        assert!(board.grid.is_empty());
        let event = board.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 2);
        assert_eq!(event.line_clear_score, 300);
        assert!(!event.level_up);
    }

    #[test]
    fn test_tetris_at_level_one() {
        let mut board = board_with(PieceKind::I, PieceKind::O);
        for y in 14..18 {
            fill_row_except(&mut board, y, &[9]);
        }
        // Stand the I up at column 9, rows 1..=4, then drop it into the well.
        board.try_move(DOWN, false);
        board.try_move(DOWN, false);
        assert!(board.rotate());
        while board.try_move((1, 0), false) {}
        assert_eq!(board.current.occupying()[0].0, 9);

        let score_before = board.score;
        let rows = board.drop_distance();
        board.hard_drop();
        assert_eq!(board.lines, 4);
        assert_eq!(board.score - score_before, u32::from(rows) + 1200);
        assert!(board.grid.is_empty());
    }

    #[test]
    fn test_non_contiguous_clear_through_lock() {
        let mut board = board_with(PieceKind::I, PieceKind::O);
        // Rows 2 and 5 miss only (9, _); rows 3 and 4 have a single marker each.
        fill_row_except(&mut board, 2, &[9]);
        fill_row_except(&mut board, 5, &[9]);
        board.grid.insert((0, 3), PieceKind::J);
        board.grid.insert((0, 4), PieceKind::S);
        board.grid.insert((0, 1), PieceKind::Z);
        board.grid.insert((8, 1), PieceKind::Z);
        // A floor under the well so the vertical I stops at rows 2..=5.
        board.grid.insert((9, 6), PieceKind::T);

        // Vertical I at column 9 covering rows 2..=5.
        board.current = Piece::new(PieceKind::I);
        board.current.confirm_move((0, 3));
        board.current.confirm_rotate();
        board.current.confirm_move((5, 0));
        assert_eq!(board.current.occupying(), [(9, 2), (9, 3), (9, 4), (9, 5)]);

        board.try_move(DOWN, false);

        assert_eq!(board.lines, 2);
        assert_eq!(board.score, 100);
        // Between the cleared rows: shifted by 1.
        assert_eq!(board.grid.get((0, 4)), Some(PieceKind::J));
        assert_eq!(board.grid.get((9, 4)), Some(PieceKind::I));
        assert_eq!(board.grid.get((0, 5)), Some(PieceKind::S));
        assert_eq!(board.grid.get((9, 5)), Some(PieceKind::I));
        // Above both: shifted by 2.
        assert_eq!(board.grid.get((0, 3)), Some(PieceKind::Z));
        assert_eq!(board.grid.get((8, 3)), Some(PieceKind::Z));
        // Below both: untouched.
        assert_eq!(board.grid.get((9, 6)), Some(PieceKind::T));
        assert_eq!(board.grid.len(), 7);
        assert_invariants(&board);
    }

    #[test]
    fn test_five_rows_count_lines_but_score_nothing() {
        let mut board = board_with(PieceKind::O, PieceKind::T);
        for y in 13..18 {
            fill_row_except(&mut board, y, &[]);
        }

        assert!(board.hard_drop());
        assert_eq!(board.lines, 5);
        assert_eq!(board.score, 11);
        let event = board.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 5);
        assert_eq!(event.line_clear_score, 0);
        // The O landed on rows 11-12 and moved down by five.
        for pos in [(4, 16), (5, 16), (4, 17), (5, 17)] {
            assert_eq!(board.grid.get(pos), Some(PieceKind::O));
        }
        assert_eq!(board.grid.len(), 4);
        assert_invariants(&board);
    }

    #[test]
    fn test_level_up_reschedules_gravity() {
        let mut board = board_with(PieceKind::O, PieceKind::T);
        let first = board.take_scheduled().unwrap();
        board.lines = 9;
        fill_row_except(&mut board, 17, &[4, 5]);

        board.hard_drop();
        assert_eq!(board.lines, 10);
        assert_eq!(board.level, 2);
        // Scored at the old level.
        assert_eq!(board.score, 16 + 40);

        let second = board.take_scheduled().unwrap();
        assert_eq!(second.level(), 2);
        assert!(second.interval() < first.interval());
        assert!(board.take_last_event().unwrap().level_up);
        assert_invariants(&board);
    }

    #[test]
    fn test_stale_tick_is_superseded_without_mutation() {
        let mut board = board_with(PieceKind::O, PieceKind::T);
        let stale = board.take_scheduled().unwrap();
        board.lines = 9;
        fill_row_except(&mut board, 17, &[4, 5]);
        board.hard_drop();
        let fresh = board.take_scheduled().unwrap();

        let before = board.current;
        let score = board.score;
        assert_eq!(board.tick(stale), TickOutcome::Superseded);
        assert_eq!(board.current, before);
        assert_eq!(board.score, score);

        assert_eq!(board.tick(fresh), TickOutcome::Rearm);
        assert_eq!(board.current.shift(), (before.shift().0, before.shift().1 + 1));
    }

    #[test]
    fn test_tick_moves_down_without_points() {
        let mut board = board_with(PieceKind::T, PieceKind::O);
        let ticket = board.take_scheduled().unwrap();
        assert_eq!(board.tick(ticket), TickOutcome::Rearm);
        assert_eq!(board.current.shift(), (4, 1));
        assert_eq!(board.score, 0);
    }

    #[test]
    fn test_tick_locks_when_blocked() {
        let mut board = board_with(PieceKind::O, PieceKind::T);
        let ticket = board.take_scheduled().unwrap();
        for _ in 0..16 {
            assert_eq!(board.tick(ticket), TickOutcome::Rearm);
        }
        assert!(board.grid.is_empty());
        assert_eq!(board.tick(ticket), TickOutcome::Rearm);
        assert_eq!(board.grid.len(), 4);
        assert_eq!(board.current.kind(), PieceKind::T);
    }

    #[test]
    fn test_game_over_on_blocked_spawn() {
        let mut board = board_with(PieceKind::I, PieceKind::O);
        // Block the O spawn cells (4,0) (4,1) (5,0) (5,1) while leaving row 0 incomplete.
        for x in 0..BOARD_WIDTH as i8 {
            if x != 0 && x != 1 {
                board.grid.insert((x, 1), PieceKind::L);
            }
        }
        board.grid.insert((4, 0), PieceKind::L);
        board.grid.insert((5, 0), PieceKind::L);
        // Park the I piece on the free cells at the far left of row 0.
        board.current.confirm_move((-3, 0));
        assert_eq!(board.current.occupying(), [(0, 0), (1, 0), (2, 0), (3, 0)]);

        // Blocked below at (2,1) and (3,1): the downward move locks.
        assert!(board.try_move(DOWN, false));
        assert!(board.is_over());
        assert!(board.take_last_event().unwrap().game_over);

        let snap = board.snapshot();
        assert!(!board.try_move((1, 0), false));
        assert!(!board.try_move(DOWN, true));
        assert!(!board.rotate());
        assert!(!board.hard_drop());
        assert_eq!(board.snapshot(), snap);
    }

    #[test]
    fn test_ticks_superseded_after_game_over() {
        let mut board = board_with(PieceKind::O, PieceKind::O);
        let ticket = board.take_scheduled().unwrap();
        board.over = true;
        assert_eq!(board.tick(ticket), TickOutcome::Superseded);
    }

    #[test]
    fn test_with_grid_detects_blocked_first_spawn() {
        let grid: LockedCells = [((4, 0), PieceKind::J)].into_iter().collect();
        let board = Board::with_grid(
            grid,
            NextPieceSource::with_next(PieceKind::T, 3),
            GravityConfig::default(),
        );
        assert!(board.is_over());
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut board = Board::new(777);
        let ticket = board.take_scheduled().unwrap();
        let actions = [
            GameAction::MoveLeft,
            GameAction::Rotate,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::MoveRight,
            GameAction::HardDrop,
        ];
        let mut last_score = 0;
        for step in 0..2000 {
            board.apply_action(actions[step % actions.len()]);
            if step % 3 == 0 {
                board.tick(ticket);
            }
            assert!(board.score >= last_score);
            last_score = board.score;
            assert_invariants(&board);
            if board.is_over() {
                break;
            }
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut board = board_with(PieceKind::O, PieceKind::S);
        board.grid.insert((0, 17), PieceKind::Z);
        board.score = 5;
        let snap = board.snapshot();
        assert_eq!(snap.grid[17][0], Some(PieceKind::Z));
        assert_eq!(snap.current.kind, PieceKind::O);
        assert_eq!(snap.current.cells, board.current.occupying());
        assert_eq!(snap.next.kind, PieceKind::S);
        assert_eq!(snap.ghost_drop, 16);
        assert_eq!(snap.score, 5);
        assert_eq!(snap.level, 1);
        assert!(!snap.game_over);
    }
}
