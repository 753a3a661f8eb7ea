use crate::domain::card::Card;
use crate::domain::table::TableState;
use crate::engine::errors::PlayRejection;

/// Проверка, может ли набор карт лечь поверх текущего стола.
///
/// Порядок проверок:
/// 1. набор не пустой;
/// 2. все карты одного ранга;
/// 3. чистый стол принимает любой такой набор;
/// 4. иначе количество карт совпадает с последним ходом;
/// 5. и ранг строго выше.
pub fn validate_play(proposed: &[Card], table: &TableState) -> Result<(), PlayRejection> {
    let first = proposed.first().ok_or(PlayRejection::Empty)?;

    if proposed.iter().any(|c| c.rank != first.rank) {
        return Err(PlayRejection::MixedRanks);
    }

    let Some(last_rank) = table.last_rank() else {
        return Ok(());
    };

    if proposed.len() != table.required_arity() {
        return Err(PlayRejection::ArityMismatch {
            expected: table.required_arity(),
            got: proposed.len(),
        });
    }

    if first.rank <= last_rank {
        return Err(PlayRejection::NotHigher {
            proposed: first.rank,
            last: last_rank,
        });
    }

    Ok(())
}

/// Булева версия `validate_play`.
pub fn is_valid_play(proposed: &[Card], table: &TableState) -> bool {
    validate_play(proposed, table).is_ok()
}
