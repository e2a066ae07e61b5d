//////////////////////////////////////////////////////////////////////
// use error chain so we can use Result<> everywhere
// for error handling

error_chain!{

    foreign_links {
        Fmt(::std::fmt::Error);
        Io(::std::io::Error);
        Cairo(::cairo::Error);
    }

    errors {

        // bad depth, seed count, index, or scene value
        InvalidArgument(what: String) {
            description("invalid argument")
            display("invalid argument: {:}", what)
        }

        // zero-area or non-finite triangle handed to the subdivider
        DegenerateGeometry(what: String) {
            description("degenerate geometry")
            display("degenerate geometry: {:}", what)
        }

    }

}
