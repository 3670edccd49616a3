use broadside::{BitBoard, BitBoardError};

type Board10 = BitBoard<u128, 10>;

#[test]
fn set_and_get_respect_bounds() {
    let mut bb = Board10::new();
    assert!(bb.is_empty());
    bb.set(9, 9).unwrap();
    assert!(bb.get(9, 9).unwrap());
    assert!(!bb.get(0, 0).unwrap());
    assert_eq!(bb.set(10, 0), Err(BitBoardError::IndexOutOfBounds { x: 10, y: 0 }));
    assert_eq!(bb.get(0, 10), Err(BitBoardError::IndexOutOfBounds { x: 0, y: 10 }));
    bb.clear_all();
    assert_eq!(bb.count_ones(), 0);
}

#[test]
fn cells_come_back_in_order() {
    let bb = Board10::from_cells([(3, 1), (0, 4), (3, 0)]).unwrap();
    let cells: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(cells, vec![(0, 4), (3, 0), (3, 1)]);
    assert!(Board10::from_cells([(1, 1), (11, 1)]).is_err());
}

#[test]
fn set_operations() {
    let a = Board10::from_cells([(0, 0), (1, 0)]).unwrap();
    let b = Board10::from_cells([(1, 0), (2, 0)]).unwrap();
    assert_eq!((a & b).iter_set_bits().collect::<Vec<_>>(), vec![(1, 0)]);

    let mut union = a | b;
    assert_eq!(union.count_ones(), 3);
    assert!(union.contains_all(&a));
    assert!(union.contains_all(&b));
    assert!(!a.contains_all(&b));

    union |= Board10::from_cells([(9, 9)]).unwrap();
    assert!(union.get(9, 9).unwrap());
}

#[test]
fn small_boards_fit_small_integers() {
    let mut bb = BitBoard::<u16, 4>::new();
    bb.set(3, 3).unwrap();
    assert_eq!(bb.iter_set_bits().next(), Some((3, 3)));
    assert!(bb.set(4, 0).is_err());
    assert_eq!(bb.to_string().lines().count(), 4);
}
