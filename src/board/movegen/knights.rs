use super::super::Square;

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(super) fn candidates(from: Square) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| from.offset(dx, dy))
        .collect()
}
