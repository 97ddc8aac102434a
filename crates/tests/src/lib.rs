#[cfg(test)]
mod common;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod doctor_list_tests;

#[cfg(test)]
mod doctor_get_tests;

#[cfg(test)]
mod doctor_schedule_tests;

#[cfg(test)]
mod appointment_create_tests;

#[cfg(test)]
mod appointment_get_tests;

#[cfg(test)]
mod appointment_list_tests;

#[cfg(test)]
mod appointment_cancel_tests;

#[cfg(test)]
mod appointment_complete_tests;
