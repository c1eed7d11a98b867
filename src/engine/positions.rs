use crate::domain::{HeadsUpBlinds, SeatIndex, Table};

/// Найти следующее активное место по кругу (включая/исключая start).
pub fn next_active_seat(table: &Table, start: SeatIndex, include_start: bool) -> Option<SeatIndex> {
    let seats = table.players_sat_down();
    let n = seats.len();
    if n == 0 {
        return None;
    }

    let first = if include_start { 0 } else { 1 };
    (first..first + n)
        .map(|step| (start as usize + step) % n)
        .find(|&idx| seats[idx].is_active())
        .map(|idx| idx as SeatIndex)
}

/// Места, которые получат карты (активные и с фишками), по кругу,
/// начиная с start (включительно).
pub fn collect_dealt_in_seats_from(table: &Table, start: SeatIndex) -> Vec<SeatIndex> {
    let seats = table.players_sat_down();
    let n = seats.len();

    (0..n)
        .map(|step| (start as usize + step) % n)
        .filter(|&idx| seats[idx].can_be_dealt_in())
        .map(|idx| idx as SeatIndex)
        .collect()
}

/// Места малого и большого блайнда относительно кнопки.
///
/// Обычно SB занимает первое место с картами после кнопки, BB следующее за ним.
/// При ровно двух игроках с картами правило задаёт `HeadsUpBlinds`.
/// Если у игрока на кнопке нет фишек, блайнды ставят двое следующих.
pub fn blind_seats(table: &Table, heads_up: HeadsUpBlinds) -> Option<(SeatIndex, SeatIndex)> {
    let button = table.button_seat();
    let order = collect_dealt_in_seats_from(table, button);
    let button_dealt_in = order.first() == Some(&button);

    match (order.len(), heads_up, button_dealt_in) {
        (0 | 1, _, _) => None,
        (_, _, false) => Some((order[0], order[1])),
        (2, HeadsUpBlinds::ButtonPostsSmallBlind, true) => Some((order[0], order[1])),
        (n, _, true) => Some((order[1 % n], order[2 % n])),
    }
}
