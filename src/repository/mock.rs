//! Mock listing backend for isolating services in tests.

use mockall::mock;

use crate::domain::room::Room;
use crate::repository::errors::RepositoryResult;
use crate::repository::{RoomListQuery, RoomReader};

mock! {
    pub Repository {}

    impl RoomReader for Repository {
        fn list_rooms(&self, query: &RoomListQuery) -> RepositoryResult<(usize, Vec<Room>)>;
    }
}
