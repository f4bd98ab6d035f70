use super::*;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::South.opponent(), Side::North);
    assert_eq!(Side::North.opponent(), Side::South);
}

#[test]
fn test_board_constants() {
    assert_eq!(PITS_PER_SIDE, 6);
    assert_eq!(POSITIONS, 14);
    assert_eq!(TOTAL_SEEDS, 48);
}

#[test]
fn test_new_board() {
    let board = Board::new();
    for pit in Side::South.pits().into_iter().chain(Side::North.pits()) {
        assert_eq!(board.pit(pit), 4);
    }
    assert_eq!(board.store(Side::South), 0);
    assert_eq!(board.store(Side::North), 0);
    assert_eq!(board.total_seeds(), TOTAL_SEEDS);
}

#[test]
fn test_pit_labels_round_trip() {
    let labels: String = Side::South
        .pits()
        .into_iter()
        .chain(Side::North.pits())
        .map(|p| p.label())
        .collect();
    assert_eq!(labels, "ABCDEFGHIJKL");

    for c in 'A'..='L' {
        let pit = Pit::from_label(c).unwrap();
        assert_eq!(pit.label(), c);
    }
    assert_eq!(Pit::from_label('c'), Pit::from_label('C'));
    assert_eq!(Pit::from_label('M'), None);
    assert_eq!(Pit::from_label('1'), None);
}

#[test]
fn test_pit_sides() {
    for pit in Side::South.pits() {
        assert_eq!(pit.side(), Side::South);
        assert!(Side::South.owns(pit));
        assert!(!Side::North.owns(pit));
    }
    for pit in Side::North.pits() {
        assert_eq!(pit.side(), Side::North);
    }
}

#[test]
fn test_opposite_pits() {
    let pairs = [
        ('A', 'L'),
        ('B', 'K'),
        ('C', 'J'),
        ('D', 'I'),
        ('E', 'H'),
        ('F', 'G'),
    ];
    for (a, b) in pairs {
        let pa = Pit::from_label(a).unwrap();
        let pb = Pit::from_label(b).unwrap();
        assert_eq!(pa.opposite(), pb);
        assert_eq!(pb.opposite(), pa);
    }
}

#[test]
fn test_successor_ring() {
    // A..F, store 1, G..L, store 2, back to A
    let mut pos = Pit::from_label('A').unwrap().position();
    let mut order = Vec::new();
    for _ in 0..POSITIONS {
        order.push(pos.to_string());
        pos = pos.next();
    }
    assert_eq!(
        order,
        vec![
            "A", "B", "C", "D", "E", "F", "store 1", "G", "H", "I", "J", "K", "L", "store 2"
        ]
    );
    assert_eq!(pos, Pit::from_label('A').unwrap().position());
}

#[test]
fn test_store_ownership() {
    assert!(Position::SOUTH_STORE.is_store());
    assert!(Position::NORTH_STORE.is_store());
    assert_eq!(Position::SOUTH_STORE.owner(), Side::South);
    assert_eq!(Position::NORTH_STORE.owner(), Side::North);
    assert_eq!(Side::South.store(), Position::SOUTH_STORE);
    assert_eq!(Position::NORTH_STORE.to_pit(), None);
}

#[test]
fn test_pit_columns() {
    let columns: Vec<usize> = Side::North.pits().iter().map(|p| p.column()).collect();
    assert_eq!(columns, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_from_counts() {
    let board = Board::from_counts([1, 2, 3, 4, 5, 6], [7, 8, 9, 10, 11, 12], 13, 14);
    assert_eq!(board.pit(Pit::from_label('A').unwrap()), 1);
    assert_eq!(board.pit(Pit::from_label('F').unwrap()), 6);
    assert_eq!(board.pit(Pit::from_label('G').unwrap()), 7);
    assert_eq!(board.pit(Pit::from_label('L').unwrap()), 12);
    assert_eq!(board.store(Side::South), 13);
    assert_eq!(board.store(Side::North), 14);
    assert_eq!(board.side_seeds(Side::South), 21);
}

#[test]
fn test_take_empties_position() {
    let mut board = Board::new();
    let a = Pit::from_label('A').unwrap().position();
    assert_eq!(board.take(a), 4);
    assert_eq!(board.seeds(a), 0);
}

#[test]
fn test_side_empty() {
    let board = Board::from_counts([0; 6], [0, 0, 1, 0, 0, 0], 0, 0);
    assert!(board.is_side_empty(Side::South));
    assert!(!board.is_side_empty(Side::North));
}

#[test]
fn test_display_layout() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].trim_start().starts_with('L'));
    assert!(lines[4].trim_start().starts_with('A'));
}
