use libc::c_char;
use minesweeper::{Error, FieldType, Game, GameConfig, RevealOutcome, SizeType};
use std::cmp;
use std::ptr;
use std::slice;
use strum_macros::Display;

#[repr(C)]
#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum CError {
    Ok,
    InvalidInput,
    NullPointerAsInput,
    IndexIsOutOfRange,
    InsufficientBuffer,
    InvalidConfiguration,
    UnexpectedError,
}

impl From<&Error> for CError {
    fn from(error: &Error) -> CError {
        match error {
            Error::InvalidConfiguration { .. } => CError::InvalidConfiguration,
            Error::OutOfBounds { .. } => CError::IndexIsOutOfRange,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum CRevealResult {
    AlreadyRevealed,
    Continue,
    MineHit,
    Win,
}

macro_rules! return_error {
    ($error_info_ptr:ident, $error_code:expr, $error_msg:expr) => {{
        let error_info = unsafe { &mut *$error_info_ptr };
        let error_message: &str = &$error_msg;
        if !error_message.is_empty()
            && error_info.error_message_max_length > 0
            && !error_info.error_message.is_null()
        {
            let len_without_terminator = cmp::min(
                usize::try_from(error_info.error_message_max_length - 1).unwrap_or(usize::MAX),
                error_message.len(),
            );
            unsafe {
                ptr::copy_nonoverlapping(
                    error_message.as_ptr(),
                    error_info.error_message as *mut u8,
                    len_without_terminator,
                );
                *error_info.error_message.add(len_without_terminator) = 0;
            }
            error_info.error_message_length = len_without_terminator as u64;
        }
        error_info.error_code = $error_code;
        return;
    }};
    ($error_info_ptr:ident, $error_code:expr) => {
        return_error!($error_info_ptr, $error_code, "")
    };
}

macro_rules! return_or_assign {
    ($x:expr, $error_info_ptr:ident, $error_code:expr) => {
        match $x {
            Ok(value) => value,
            Err(error) => {
                return_error!($error_info_ptr, $error_code, error.to_string());
            }
        }
    };
    ($x:expr, $error_info_ptr:ident) => {
        match $x {
            Ok(value) => value,
            Err(error) => {
                return_error!($error_info_ptr, CError::from(&error), error.to_string());
            }
        }
    };
}

macro_rules! initialize_to_ok {
    ($error_info_ptr:ident) => {
        if $error_info_ptr.is_null() {
            return;
        }
        let error_info = unsafe { &mut *$error_info_ptr };
        error_info.error_code = CError::Ok;
        error_info.error_message_length = 0;
    };
}

// Based on this https://s3.amazonaws.com/temp.michaelfbryan.com/objects/index.html

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CFieldInfo {
    row: u64,
    column: u64,
    field_type: FieldType,
}

/// `field_infos_ptr` must point to at least `field_infos_max_length` items and
/// has to be able to hold every hidden field of the board.
#[repr(C)]
pub struct CRevealInfo {
    result: CRevealResult,
    field_infos_length: u64,
    field_infos_max_length: u64,
    field_infos_ptr: *mut CFieldInfo,
}

#[repr(C)]
pub struct CErrorInfo {
    error_code: CError,
    error_message_length: u64,
    error_message_max_length: u64,
    error_message: *mut c_char,
}

// Values that do not fit are clamped, so the game reports them as out of range.
fn convert_u64_to_usize(value: u64) -> SizeType {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn convert_size(size: usize) -> Result<u64, std::num::TryFromIntError> {
    u64::try_from(size)
}

#[no_mangle]
pub extern "C" fn minesweeper_new_game(
    game_ptr_ptr: *mut *mut Game,
    size: u64,
    mine_count: u64,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if game_ptr_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let game_ptr = unsafe { &mut *game_ptr_ptr };
    if !game_ptr.is_null() {
        return_error!(c_ei_ptr, CError::InvalidInput);
    }

    let config = return_or_assign!(
        GameConfig::new(convert_u64_to_usize(size), convert_u64_to_usize(mine_count)),
        c_ei_ptr
    );
    let game = return_or_assign!(Game::new(config), c_ei_ptr);
    *game_ptr = Box::into_raw(Box::new(game));
}

#[no_mangle]
pub extern "C" fn minesweeper_game_reveal(
    game_ptr: *mut Game,
    row: u64,
    column: u64,
    c_reveal_info_ptr: *mut CRevealInfo,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if game_ptr.is_null() || c_reveal_info_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }

    let c_reveal_info = unsafe { &mut *c_reveal_info_ptr };
    if c_reveal_info.field_infos_length != 0 {
        return_error!(c_ei_ptr, CError::InvalidInput);
    }
    if c_reveal_info.field_infos_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }

    let game = unsafe { &mut *game_ptr };
    let hidden_fields = game.size() * game.size() - game.revealed_count();
    if c_reveal_info.field_infos_max_length < hidden_fields as u64 {
        return_error!(c_ei_ptr, CError::InsufficientBuffer);
    }

    let (urow, ucolumn) = (convert_u64_to_usize(row), convert_u64_to_usize(column));
    let revealed_before = game.revealed_state().clone();
    let reveal_outcome = return_or_assign!(game.reveal_cell(urow, ucolumn), c_ei_ptr);

    let (result, revealed_fields): (CRevealResult, Vec<(SizeType, SizeType)>) =
        match reveal_outcome {
            RevealOutcome::AlreadyRevealed => (CRevealResult::AlreadyRevealed, Vec::new()),
            RevealOutcome::Continue(revealed_fields) => (
                CRevealResult::Continue,
                revealed_fields.into_iter().collect(),
            ),
            RevealOutcome::MineHit => (CRevealResult::MineHit, vec![(urow, ucolumn)]),
            RevealOutcome::Win => {
                let size = game.size();
                let newly_revealed = (0..size)
                    .flat_map(|r| (0..size).map(move |c| (r, c)))
                    .filter(|&(r, c)| {
                        revealed_before.is_revealed(r, c) == Ok(false)
                            && game.is_revealed(r, c) == Ok(true)
                    })
                    .collect();
                (CRevealResult::Win, newly_revealed)
            }
        };

    c_reveal_info.result = result;
    let c_field_infos: &mut [CFieldInfo] = unsafe {
        slice::from_raw_parts_mut(
            c_reveal_info.field_infos_ptr,
            c_reveal_info.field_infos_max_length as usize,
        )
    };
    for (index, (r, c)) in revealed_fields.iter().copied().enumerate() {
        c_field_infos[index] = CFieldInfo {
            row: return_or_assign!(convert_size(r), c_ei_ptr, CError::UnexpectedError),
            column: return_or_assign!(convert_size(c), c_ei_ptr, CError::UnexpectedError),
            field_type: return_or_assign!(game.field_type(r, c), c_ei_ptr),
        };
    }
    c_reveal_info.field_infos_length = revealed_fields.len() as u64;
}

#[no_mangle]
pub extern "C" fn minesweeper_game_reset(game_ptr: *mut Game, c_ei_ptr: *mut CErrorInfo) {
    initialize_to_ok!(c_ei_ptr);
    if game_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let game = unsafe { &mut *game_ptr };
    return_or_assign!(game.reset(), c_ei_ptr);
}

#[no_mangle]
pub extern "C" fn minesweeper_game_is_won(
    game_ptr: *mut Game,
    is_won_ptr: *mut bool,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if game_ptr.is_null() || is_won_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let game = unsafe { &*game_ptr };
    unsafe { *is_won_ptr = game.is_won() };
}

#[no_mangle]
pub extern "C" fn minesweeper_game_is_lost(
    game_ptr: *mut Game,
    is_lost_ptr: *mut bool,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if game_ptr.is_null() || is_lost_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let game = unsafe { &*game_ptr };
    unsafe { *is_lost_ptr = game.is_lost() };
}

#[no_mangle]
pub extern "C" fn minesweeper_game_get_size(
    game_ptr: *mut Game,
    size_ptr: *mut u64,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if game_ptr.is_null() || size_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let game = unsafe { &*game_ptr };
    let size = return_or_assign!(
        convert_size(game.size()),
        c_ei_ptr,
        CError::IndexIsOutOfRange
    );
    unsafe { *size_ptr = size };
}

#[no_mangle]
pub extern "C" fn minesweeper_game_get_mine_count(
    game_ptr: *mut Game,
    mine_count_ptr: *mut u64,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if game_ptr.is_null() || mine_count_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let game = unsafe { &*game_ptr };
    let mine_count = return_or_assign!(
        convert_size(game.mine_count()),
        c_ei_ptr,
        CError::IndexIsOutOfRange
    );
    unsafe { *mine_count_ptr = mine_count };
}

#[no_mangle]
pub extern "C" fn minesweeper_destroy_game(game_ptr: *mut Game) {
    if game_ptr.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(game_ptr) });
}
