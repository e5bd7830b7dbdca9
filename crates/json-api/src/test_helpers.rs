//! Test helpers.

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use hotel_app::{
    auth::{Caller, MockAuthService},
    context::AppContext,
    domain::{
        bookings::{
            MockBookingsService,
            records::{BookingRecord, BookingUuid},
        },
        hotels::{
            MockHotelsService,
            records::{HotelRecord, HotelUuid},
        },
        rooms::{
            MockRoomsService,
            records::{RoomRecord, RoomUuid},
        },
        users::{
            MockUsersService,
            records::{UserRecord, UserUuid},
        },
    },
};

use crate::state::State;

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(1));
pub(crate) const TEST_ADMIN_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(2));

pub(crate) const USER: Caller = Caller {
    uuid: TEST_USER_UUID,
    is_admin: false,
};

pub(crate) const ADMIN: Caller = Caller {
    uuid: TEST_ADMIN_UUID,
    is_admin: true,
};

/// Start of every stay built by these helpers; far enough ahead to never be in the past.
pub(crate) const BASE: Timestamp = Timestamp::constant(4_102_444_800, 0);

pub(crate) fn make_user(uuid: UserUuid, is_admin: bool) -> UserRecord {
    UserRecord {
        uuid,
        first_name: "James".to_string(),
        last_name: "Foo".to_string(),
        email: "james@foo.com".to_string(),
        encrypted_password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        is_admin,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_hotel(uuid: HotelUuid, rooms: Vec<RoomUuid>) -> HotelRecord {
    HotelRecord {
        uuid,
        name: "Bellucia".to_string(),
        location: "France".to_string(),
        rating: 3,
        rooms,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_room(uuid: RoomUuid, hotel_uuid: HotelUuid) -> RoomRecord {
    RoomRecord {
        uuid,
        hotel_uuid,
        size: "small".to_string(),
        price: 9_900,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_booking(
    uuid: BookingUuid,
    room_uuid: RoomUuid,
    user_uuid: UserUuid,
) -> BookingRecord {
    BookingRecord {
        uuid,
        room_uuid,
        user_uuid,
        from_date: BASE,
        till_date: BASE + SignedDuration::from_hours(72),
        num_persons: 2,
        canceled: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate().never();
    auth.expect_authenticate_token().never();

    auth
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_register_user().never();
    users.expect_get_user().never();
    users.expect_list_users().never();
    users.expect_update_user().never();
    users.expect_delete_user().never();

    users
}

fn strict_hotels_mock() -> MockHotelsService {
    let mut hotels = MockHotelsService::new();

    hotels.expect_create_hotel().never();
    hotels.expect_get_hotel().never();
    hotels.expect_list_hotels().never();

    hotels
}

fn strict_rooms_mock() -> MockRoomsService {
    let mut rooms = MockRoomsService::new();

    rooms.expect_create_room().never();
    rooms.expect_get_room().never();
    rooms.expect_list_rooms().never();

    rooms
}

fn strict_bookings_mock() -> MockBookingsService {
    let mut bookings = MockBookingsService::new();

    bookings.expect_create_booking().never();
    bookings.expect_get_booking().never();
    bookings.expect_list_bookings().never();
    bookings.expect_cancel_booking().never();

    bookings
}

/// Builds request state where every service not handed in fails the test if called.
pub(crate) struct TestState {
    auth: MockAuthService,
    users: MockUsersService,
    hotels: MockHotelsService,
    rooms: MockRoomsService,
    bookings: MockBookingsService,
}

impl TestState {
    pub(crate) fn new() -> Self {
        Self {
            auth: strict_auth_mock(),
            users: strict_users_mock(),
            hotels: strict_hotels_mock(),
            rooms: strict_rooms_mock(),
            bookings: strict_bookings_mock(),
        }
    }

    pub(crate) fn auth(self, auth: MockAuthService) -> Self {
        Self { auth, ..self }
    }

    pub(crate) fn users(self, users: MockUsersService) -> Self {
        Self { users, ..self }
    }

    pub(crate) fn hotels(self, hotels: MockHotelsService) -> Self {
        Self { hotels, ..self }
    }

    pub(crate) fn rooms(self, rooms: MockRoomsService) -> Self {
        Self { rooms, ..self }
    }

    pub(crate) fn bookings(self, bookings: MockBookingsService) -> Self {
        Self { bookings, ..self }
    }

    pub(crate) fn build(self) -> Arc<State> {
        State::from_app_context(AppContext {
            auth: Arc::new(self.auth),
            users: Arc::new(self.users),
            hotels: Arc::new(self.hotels),
            rooms: Arc::new(self.rooms),
            bookings: Arc::new(self.bookings),
        })
    }

    /// Serve `route` as an unauthenticated client.
    pub(crate) fn anonymous_service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.build())).push(route))
    }

    /// Serve `route` as if the auth middleware had resolved `caller`.
    pub(crate) fn service_as(self, caller: Caller, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.build()))
                .hoop(inject(caller))
                .push(route),
        )
    }
}
