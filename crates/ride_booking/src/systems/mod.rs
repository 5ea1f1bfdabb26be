pub mod booking_cancelled;
pub mod booking_confirmed;
pub mod location_submitted;
pub mod navigation_hand_off;
pub mod option_selected;
pub mod selection_revised;
pub mod start_over;
