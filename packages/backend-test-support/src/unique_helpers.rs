//! Ids that never collide within one test binary.

use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

static NEXT_PLAYER: AtomicI64 = AtomicI64::new(1_000);
static NEXT_ROOM: AtomicU32 = AtomicU32::new(0);

/// Six-character upper-case room code, like the ones rooms hand out.
///
/// ```
/// use backend_test_support::unique_helpers::unique_room_id;
///
/// let a = unique_room_id();
/// assert_eq!(a.len(), 6);
/// assert_ne!(a, unique_room_id());
/// ```
pub fn unique_room_id() -> String {
    let mut n = NEXT_ROOM.fetch_add(1, Ordering::Relaxed);
    let mut code = [b'A'; 6];
    for slot in code.iter_mut().rev() {
        *slot = b'A' + (n % 26) as u8;
        n /= 26;
    }
    String::from_utf8_lossy(&code).into_owned()
}

/// `count` fresh, increasing player ids.
pub fn unique_player_ids(count: usize) -> Vec<i64> {
    let first = NEXT_PLAYER.fetch_add(count as i64, Ordering::Relaxed);
    (first..first + count as i64).collect()
}
