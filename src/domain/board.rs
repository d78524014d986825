//! Drag-and-drop letter board: a bank of shuffled tiles and one ordered slot per letter.

use crate::domain::DomainError;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub letter: char,
}

/// Invariant: every tile is in exactly one place, either the bank or a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBoard {
    tiles: Vec<Tile>,
    slots: Vec<Option<TileId>>,
    bank: Vec<TileId>,
}

impl TileBoard {
    /// One slot per letter of `answer`; the bank holds the same letters shuffled.
    pub fn new<R: Rng + ?Sized>(answer: &str, rng: &mut R) -> Self {
        let mut letters: Vec<char> = answer.chars().collect();
        letters.shuffle(rng);
        let tiles: Vec<Tile> = letters
            .into_iter()
            .enumerate()
            .map(|(i, letter)| Tile {
                id: TileId(i),
                letter,
            })
            .collect();
        let bank = tiles.iter().map(|t| t.id).collect();
        Self {
            slots: vec![None; tiles.len()],
            tiles,
            bank,
        }
    }

    pub fn tile(&self, id: TileId) -> Option<Tile> {
        self.tiles.get(id.0).copied()
    }

    /// Tiles waiting in the bank, in bank order.
    pub fn bank(&self) -> Vec<Tile> {
        self.bank.iter().filter_map(|&id| self.tile(id)).collect()
    }

    /// Slot contents, left to right.
    pub fn slots(&self) -> Vec<Option<Tile>> {
        self.slots
            .iter()
            .map(|slot| slot.and_then(|id| self.tile(id)))
            .collect()
    }

    pub fn slot_of(&self, id: TileId) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(id))
    }

    /// Move `tile` into `slot`. Frees the slot it came from; a tile already in `slot`
    /// goes back to the end of the bank.
    pub fn place(&mut self, id: TileId, slot: usize) -> Result<(), DomainError> {
        if self.tile(id).is_none() {
            return Err(DomainError::Board(format!("no tile {}", id.0)));
        }
        if slot >= self.slots.len() {
            return Err(DomainError::Board(format!("no slot {slot}")));
        }
        if self.slots[slot] == Some(id) {
            return Ok(());
        }
        match self.slot_of(id) {
            Some(previous) => self.slots[previous] = None,
            None => self.bank.retain(|&b| b != id),
        }
        if let Some(occupant) = self.slots[slot].replace(id) {
            self.bank.push(occupant);
        }
        Ok(())
    }

    /// Send the tile in `slot` back to the bank. Returns whether a tile was there.
    pub fn clear_slot(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot).and_then(Option::take) {
            Some(id) => {
                self.bank.push(id);
                true
            }
            None => false,
        }
    }

    /// Move every placed tile back to the bank, in slot order.
    pub fn reset(&mut self) {
        for slot in 0..self.slots.len() {
            self.clear_slot(slot);
        }
    }

    /// Letters in the slots, left to right. Empty slots contribute nothing.
    pub fn constructed(&self) -> String {
        self.slots().into_iter().flatten().map(|t| t.letter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Verdict, check_answer};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(answer: &str) -> TileBoard {
        TileBoard::new(answer, &mut StdRng::seed_from_u64(7))
    }

    /// Place tiles so the slots spell `word` (letters must come from the board).
    fn spell(board: &mut TileBoard, word: &str) {
        for (slot, letter) in word.chars().enumerate() {
            let tile = board
                .bank()
                .into_iter()
                .find(|t| t.letter == letter)
                .expect("letter available in bank");
            board.place(tile.id, slot).unwrap();
        }
    }

    #[test]
    fn bank_holds_answer_letters() {
        let b = board("LIBRERIA");
        let mut bank: Vec<char> = b.bank().iter().map(|t| t.letter).collect();
        bank.sort_unstable();
        let mut expected: Vec<char> = "LIBRERIA".chars().collect();
        expected.sort_unstable();
        assert_eq!(bank, expected);
        assert_eq!(b.slots().len(), 8);
        assert_eq!(b.constructed(), "");
    }

    #[test]
    fn spelling_fills_slots_in_order() {
        let mut b = board("DVD");
        spell(&mut b, "DVD");
        assert!(b.slots().iter().all(Option::is_some));
        assert!(b.bank().is_empty());
        assert_eq!(b.constructed(), "DVD");
    }

    #[test]
    fn moving_a_placed_tile_frees_its_slot() {
        let mut b = board("ABC");
        let tile = b.bank()[0];
        b.place(tile.id, 0).unwrap();
        b.place(tile.id, 2).unwrap();
        assert_eq!(b.slots()[0], None);
        assert_eq!(b.slots()[2], Some(tile));
        assert_eq!(b.slot_of(tile.id), Some(2));
        assert_eq!(b.bank().len(), 2);
    }

    #[test]
    fn dropping_on_occupied_slot_returns_occupant_to_bank() {
        let mut b = board("ABC");
        let first = b.bank()[0];
        let second = b.bank()[1];
        b.place(first.id, 1).unwrap();
        b.place(second.id, 1).unwrap();
        assert_eq!(b.slots()[1], Some(second));
        assert_eq!(b.bank().last(), Some(&first));
        assert_eq!(b.bank().len(), 2);
    }

    #[test]
    fn reset_returns_everything() {
        let mut b = board("DVD");
        spell(&mut b, "DVD");
        b.reset();
        assert_eq!(b.bank().len(), 3);
        assert!(b.slots().iter().all(Option::is_none));
    }

    #[test]
    fn clear_slot_reports_occupancy() {
        let mut b = board("AB");
        let tile = b.bank()[0];
        b.place(tile.id, 0).unwrap();
        assert!(b.clear_slot(0));
        assert!(!b.clear_slot(0));
        assert!(!b.clear_slot(9));
    }

    #[test]
    fn invalid_moves_are_rejected() {
        let mut b = board("AB");
        assert!(b.place(TileId(5), 0).is_err());
        let tile = b.bank()[0];
        assert!(b.place(tile.id, 2).is_err());
        assert_eq!(b.bank().len(), 2);
    }

    proptest! {
        #[test]
        fn proptest_spelled_answer_is_correct(answer in "\\PC{1,16}", seed in any::<u64>()) {
            let mut b = TileBoard::new(&answer, &mut StdRng::seed_from_u64(seed));
            spell(&mut b, &answer);
            prop_assert!(b.bank().is_empty());
            prop_assert_eq!(&b.constructed(), &answer);
            prop_assert_eq!(check_answer(&b.constructed(), &answer), Verdict::Correct);
        }
    }
}
