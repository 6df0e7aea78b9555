// UTF-8 handling across sections, search and snippets

mod test_decoding;
mod test_snippets;
