//! Authorization rules.
//!
//! Every decision about who may see or change a resource lives here so the
//! services and handlers agree on one answer.

use crate::{
    auth::Caller,
    domain::{bookings::records::BookingRecord, users::records::UserUuid},
};

/// Admins see every booking; everyone else only their own.
#[must_use]
pub fn can_access_booking(caller: Caller, booking: &BookingRecord) -> bool {
    caller.is_admin || booking.user_uuid == caller.uuid
}

/// Listing all bookings is an admin operation.
#[must_use]
pub fn can_list_bookings(caller: Caller) -> bool {
    caller.is_admin
}

/// A user may change their own account; admins may change any account.
#[must_use]
pub fn can_manage_user(caller: Caller, user: UserUuid) -> bool {
    caller.is_admin || caller.uuid == user
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, ToSpan};

    use crate::domain::bookings::records::BookingUuid;
    use crate::domain::rooms::records::RoomUuid;

    use super::*;

    fn booking_for(user: UserUuid) -> BookingRecord {
        let from = Timestamp::UNIX_EPOCH;

        BookingRecord {
            uuid: BookingUuid::new(),
            room_uuid: RoomUuid::new(),
            user_uuid: user,
            from_date: from,
            till_date: from + 48.hours(),
            num_persons: 2,
            canceled: false,
            created_at: from,
            updated_at: from,
        }
    }

    #[test]
    fn owner_can_access_their_booking() {
        let owner = Caller {
            uuid: UserUuid::new(),
            is_admin: false,
        };

        assert!(can_access_booking(owner, &booking_for(owner.uuid)));
    }

    #[test]
    fn stranger_cannot_access_booking() {
        let stranger = Caller {
            uuid: UserUuid::new(),
            is_admin: false,
        };

        assert!(!can_access_booking(stranger, &booking_for(UserUuid::new())));
    }

    #[test]
    fn admin_can_access_any_booking() {
        let admin = Caller {
            uuid: UserUuid::new(),
            is_admin: true,
        };

        assert!(can_access_booking(admin, &booking_for(UserUuid::new())));
    }

    #[test]
    fn only_admins_list_bookings() {
        let user = UserUuid::new();

        assert!(can_list_bookings(Caller {
            uuid: user,
            is_admin: true
        }));
        assert!(!can_list_bookings(Caller {
            uuid: user,
            is_admin: false
        }));
    }

    #[test]
    fn users_manage_only_themselves_unless_admin() {
        let caller = Caller {
            uuid: UserUuid::new(),
            is_admin: false,
        };
        let other = UserUuid::new();

        assert!(can_manage_user(caller, caller.uuid));
        assert!(!can_manage_user(caller, other));
        assert!(can_manage_user(
            Caller {
                is_admin: true,
                ..caller
            },
            other
        ));
    }
}
