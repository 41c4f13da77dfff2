//! Controller source rendering.
//!
//! The generator's own controller is replaced wholesale by this template,
//! so it must stay a pure function of the service name.

use std::path::PathBuf;

use crate::domain::service_name::ServiceName;

/// Render the controller that replaces the generated one.
///
/// The route path and greeting use the name verbatim; the class name uses
/// [`ServiceName::capitalized`]. The output has no leading or trailing
/// newline.
pub fn render_controller(name: &ServiceName) -> String {
    format!(
        "import {{ Controller, Get }} from '@nestjs/common';\n\
         \n\
         @Controller('{name}')\n\
         export class {class}Controller {{\n\
         @Get()\n\
         getOrder() {{\n\
         \x20   return 'Hello {name} Service';\n\
         }}\n\
         }}",
        name = name.as_str(),
        class = name.capitalized(),
    )
}

/// Location of the generated controller, relative to the project directory.
pub fn controller_path(name: &ServiceName) -> PathBuf {
    PathBuf::from("src")
        .join(name.as_str())
        .join(format!("{name}.controller.ts"))
}
