use crate::domain::hand::Hand;
use crate::domain::table::TableState;
use crate::engine::actions::Move;

/// Стратегия автоматического соперника.
///
/// Решение чистое: стратегия только выбирает ход, применяет его движок
/// тем же путём, что и ход человека.
pub trait OpponentStrategy {
    fn name(&self) -> &'static str;

    fn choose_move(&self, hand: &Hand, table: &TableState) -> Move;
}

/// Бьёт самой дешёвой подходящей комбинацией, старшие карты бережёт.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestBeatStrategy;

impl OpponentStrategy for LowestBeatStrategy {
    fn name(&self) -> &'static str {
        "lowest-beat"
    }

    fn choose_move(&self, hand: &Hand, table: &TableState) -> Move {
        choose_move(hand, table)
    }
}

/// - Стол чист: одна самая младшая карта.
/// - Иначе: младший ранг выше последнего хода, в котором хватает карт на нужное
///   количество; кладём ровно столько, сколько лежит на столе.
/// - Ничего не подходит: пас.
pub fn choose_move(hand: &Hand, table: &TableState) -> Move {
    let Some(last_rank) = table.last_rank() else {
        return match hand.lowest() {
            Some(card) => Move::Play(vec![card]),
            None => Move::Pass,
        };
    };

    let needed = table.required_arity();

    hand.groups_by_rank()
        .into_iter()
        .find(|(rank, group)| *rank > last_rank && group.len() >= needed)
        .map(|(_, group)| Move::Play(group.into_iter().take(needed).collect()))
        .unwrap_or(Move::Pass)
}
