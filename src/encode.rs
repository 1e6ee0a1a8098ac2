pub(crate) mod gif_writer;
