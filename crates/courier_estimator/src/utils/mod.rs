pub(crate) mod round;
