mod test_leave_room_says_bye;
